use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use walkdir::WalkDir;

use crate::game_console::thumbnail_type_from_label;
use crate::normalize::clean_title;
use crate::select::{Candidates, select_image_url};
use crate::types::{Diagnostic, RawEntry, SelectedImage, ThumbnailType};

/// Selected image per clean key, per catalog system.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    systems: BTreeMap<String, HashMap<String, SelectedImage>>,
}

impl Catalog {
    pub fn insert_system(&mut self, system: impl Into<String>, images: Vec<SelectedImage>) {
        let map = images
            .into_iter()
            .map(|image| (image.key.clone(), image))
            .collect();
        self.systems.insert(system.into(), map);
    }

    pub fn system(&self, system: &str) -> Option<&HashMap<String, SelectedImage>> {
        self.systems.get(system)
    }

    #[cfg(test)]
    pub fn lookup(&self, system: &str, key: &str) -> Option<&SelectedImage> {
        self.systems.get(system).and_then(|images| images.get(key))
    }

    #[cfg(test)]
    pub fn system_names(&self) -> impl Iterator<Item = &str> {
        self.systems.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct CatalogLoad {
    pub catalog: Catalog,
    pub diagnostics: Vec<Diagnostic>,
}

/// Load every `<System>.csv` directly inside `dir`.
///
/// Files that cannot be read or parsed are skipped and reported; an empty
/// file still registers its system with no images. A missing directory
/// yields an empty catalog plus a diagnostic.
pub fn load_catalog(
    dir: &Path,
    type_priority: &[ThumbnailType],
    region_priority: &[String],
) -> CatalogLoad {
    let mut load = CatalogLoad::default();

    if !dir.is_dir() {
        load.diagnostics.push(Diagnostic::CatalogDirMissing {
            path: dir.to_path_buf(),
        });
        return load;
    }

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                load.diagnostics.push(Diagnostic::CatalogSkipped {
                    path: err.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf()),
                    reason: err.to_string(),
                });
                continue;
            }
        };

        let path = entry.path();
        let Some(system) = catalog_system_name(path) else {
            continue;
        };
        if !path.is_file() {
            continue;
        }

        match read_catalog_file(path) {
            Ok(rows) => {
                let images = select_for_system(&system, &rows, type_priority, region_priority);
                load.catalog.insert_system(system, images);
            }
            Err(err) => load.diagnostics.push(Diagnostic::CatalogSkipped {
                path: path.to_path_buf(),
                reason: format!("{err:#}"),
            }),
        }
    }

    load
}

fn catalog_system_name(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    if name.starts_with('.') {
        return None;
    }
    if path.extension().and_then(|e| e.to_str()) != Some("csv") {
        return None;
    }
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
}

fn read_catalog_file(path: &Path) -> anyhow::Result<Vec<RawEntry>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_catalog_rows(&content)
}

/// Parse catalog CSV text into rows.
///
/// Rows with fewer than three fields or an unknown label are dropped; a
/// syntax error anywhere fails the whole input.
pub fn parse_catalog_rows(content: &str) -> anyhow::Result<Vec<RawEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.trim().as_bytes());

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("malformed CSV at record {}", index + 1))?;
        if record.len() < 3 {
            continue;
        }
        let Some(thumbnail_type) = thumbnail_type_from_label(&record[0]) else {
            continue;
        };
        rows.push(RawEntry {
            thumbnail_type,
            raw_title: record[1].to_string(),
            url: record[2].to_string(),
        });
    }

    Ok(rows)
}

/// Group one system's rows by clean key and thumbnail type, then pick one
/// image per key. Output is ordered by key.
pub fn select_for_system(
    system: &str,
    rows: &[RawEntry],
    type_priority: &[ThumbnailType],
    region_priority: &[String],
) -> Vec<SelectedImage> {
    let mut groups: BTreeMap<String, HashMap<ThumbnailType, Candidates>> = BTreeMap::new();

    for row in rows {
        if !type_priority.contains(&row.thumbnail_type) {
            continue;
        }
        let key = clean_title(&row.raw_title);
        if key.is_empty() {
            continue;
        }
        groups
            .entry(key)
            .or_default()
            .entry(row.thumbnail_type)
            .or_default()
            .push((row.raw_title.clone(), row.url.clone()));
    }

    groups
        .into_iter()
        .filter_map(|(key, by_type)| {
            let url = select_image_url(&by_type, type_priority, region_priority)?.to_string();
            Some(SelectedImage {
                system: system.to_string(),
                key,
                url,
            })
        })
        .collect()
}

/// Default catalog location: next to the executable when present there,
/// otherwise relative to the working directory.
pub fn default_catalog_dir() -> PathBuf {
    let relative = Path::new("data").join("processed").join("consoles");
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(&relative)))
        .filter(|candidate| candidate.is_dir())
        .unwrap_or(relative)
}
