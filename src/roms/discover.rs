use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use anyhow::Context;
use walkdir::{DirEntry, WalkDir};

use crate::game_console::{catalog_system_for_folder, resolve_system};
use crate::normalize::clean_title;
use crate::types::{Diagnostic, RomEntry};

/// ROM files keyed by catalog system, then clean key.
#[derive(Debug, Default)]
pub struct RomIndex {
    systems: BTreeMap<String, BTreeMap<String, RomEntry>>,
    pub diagnostics: Vec<Diagnostic>,
}

impl RomIndex {
    /// Add a ROM unless its (system, key) slot is taken, in which case the
    /// existing entry is kept and a duplicate warning is recorded.
    pub fn insert(&mut self, entry: RomEntry) -> bool {
        let roms = self.systems.entry(entry.system.clone()).or_default();
        if let Some(kept) = roms.get(&entry.key) {
            self.diagnostics.push(Diagnostic::DuplicateRom {
                system: entry.system,
                key: entry.key,
                kept: kept.path.clone(),
                dropped: entry.path,
            });
            return false;
        }
        roms.insert(entry.key.clone(), entry);
        true
    }

    #[cfg(test)]
    pub fn get(&self, system: &str, key: &str) -> Option<&RomEntry> {
        self.systems.get(system).and_then(|roms| roms.get(key))
    }

    /// Systems in name order with their ROMs in key order.
    pub fn systems(&self) -> impl Iterator<Item = (&str, impl Iterator<Item = &RomEntry>)> {
        self.systems
            .iter()
            .map(|(system, roms)| (system.as_str(), roms.values()))
    }

    pub fn len(&self) -> usize {
        self.systems.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Dotfiles such as `.DS_Store` or AppleDouble `._Game.nes` are never ROMs.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

/// Scan `root/<folder>/<file>` one level deep.
///
/// Folder names are mapped to catalog systems; files whose clean key is
/// empty are ignored. A missing root gives an empty index plus a diagnostic.
pub fn discover_roms(root: &Path) -> anyhow::Result<RomIndex> {
    let root = std::path::absolute(root)
        .with_context(|| format!("failed to resolve ROM path {}", root.display()))?;
    let mut index = RomIndex::default();

    if !root.is_dir() {
        index.diagnostics.push(Diagnostic::ScanError {
            reason: format!("{} is not a directory", root.display()),
        });
        return Ok(index);
    }

    let mut warned_folders: HashSet<String> = HashSet::new();

    let walker = WalkDir::new(&root)
        .min_depth(1)
        .max_depth(2)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                index.diagnostics.push(Diagnostic::ScanError {
                    reason: err.to_string(),
                });
                continue;
            }
        };
        if entry.depth() != 2 || !entry.file_type().is_file() {
            continue;
        }

        let Some(folder) = entry
            .path()
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
        else {
            continue;
        };
        let key = clean_title(&entry.file_name().to_string_lossy());
        if key.is_empty() {
            continue;
        }

        let inserted = index.insert(RomEntry {
            system: resolve_system(folder),
            key,
            path: entry.path().to_path_buf(),
        });

        if inserted
            && catalog_system_for_folder(folder).is_none()
            && warned_folders.insert(folder.to_string())
        {
            index.diagnostics.push(Diagnostic::UnmappedFolder {
                folder: folder.to_string(),
            });
        }
    }

    index.systems.retain(|_, roms| !roms.is_empty());
    Ok(index)
}
