use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Kind of image the catalog offers for a game.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ThumbnailType {
    Snapshot,
    Boxart,
    TitleScreen,
}

impl ThumbnailType {
    pub const ALL: [ThumbnailType; 3] = [
        ThumbnailType::Snapshot,
        ThumbnailType::Boxart,
        ThumbnailType::TitleScreen,
    ];

    /// Token accepted on the command line.
    pub fn token(&self) -> &'static str {
        match self {
            ThumbnailType::Snapshot => "snapshot",
            ThumbnailType::Boxart => "boxart",
            ThumbnailType::TitleScreen => "title_screen",
        }
    }
}

impl fmt::Display for ThumbnailType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ThumbnailType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThumbnailType::ALL
            .into_iter()
            .find(|t| t.token() == s)
            .ok_or_else(|| {
                let mut valid: Vec<&str> = ThumbnailType::ALL.iter().map(|t| t.token()).collect();
                valid.sort_unstable();
                anyhow::anyhow!(
                    "invalid thumbnail type '{}'. Valid types: {}",
                    s,
                    valid.join(", ")
                )
            })
    }
}

/// One catalog row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub thumbnail_type: ThumbnailType,
    pub raw_title: String,
    pub url: String,
}

/// The image chosen for one (system, key) pair.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SelectedImage {
    pub system: String,
    pub key: String,
    pub url: String,
}

/// A ROM file found on disk.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RomEntry {
    pub system: String,
    pub key: String,
    pub path: PathBuf,
}

/// A matched image that still has to be downloaded next to its ROM.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DownloadJob {
    pub system: String,
    pub key: String,
    pub rom: PathBuf,
    pub url: String,
    pub destination: PathBuf,
}

/// Non-fatal findings reported while building a plan.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    DuplicateRom {
        system: String,
        key: String,
        kept: PathBuf,
        dropped: PathBuf,
    },
    UnmappedFolder {
        folder: String,
    },
    SystemNotInCatalog {
        system: String,
    },
    CatalogSkipped {
        path: PathBuf,
        reason: String,
    },
    CatalogDirMissing {
        path: PathBuf,
    },
    ScanError {
        reason: String,
    },
}

impl Diagnostic {
    /// Verbosity level at which the diagnostic is worth printing.
    pub fn level(&self) -> u8 {
        match self {
            Diagnostic::CatalogSkipped { .. } | Diagnostic::ScanError { .. } => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::DuplicateRom {
                system,
                key,
                kept,
                dropped,
            } => write!(
                f,
                "Duplicate ROM found for '{}' in console '{}'. Keeping first entry: {} (ignored {})",
                key,
                system,
                kept.display(),
                dropped.display()
            ),
            Diagnostic::UnmappedFolder { folder } => write!(
                f,
                "No console mapping found for ROM folder '{}'. Using original name '{}' for matching.",
                folder, folder
            ),
            Diagnostic::SystemNotInCatalog { system } => {
                write!(f, "Console '{}' not found in catalog data, skipping.", system)
            }
            Diagnostic::CatalogSkipped { path, reason } => {
                write!(f, "Skipping catalog file {}: {}", path.display(), reason)
            }
            Diagnostic::CatalogDirMissing { path } => write!(
                f,
                "Catalog directory {} not found, no images available.",
                path.display()
            ),
            Diagnostic::ScanError { reason } => write!(f, "Could not read ROM entry: {}", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_tokens() {
        assert_eq!("snapshot".parse::<ThumbnailType>().unwrap(), ThumbnailType::Snapshot);
        assert_eq!("boxart".parse::<ThumbnailType>().unwrap(), ThumbnailType::Boxart);
        assert_eq!(
            "title_screen".parse::<ThumbnailType>().unwrap(),
            ThumbnailType::TitleScreen
        );
    }

    #[test]
    fn rejects_unknown_token_and_lists_valid_ones() {
        let err = "Boxart".parse::<ThumbnailType>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("invalid thumbnail type 'Boxart'"));
        assert!(msg.contains("boxart, snapshot, title_screen"));
    }

    #[test]
    fn scan_level_diagnostics_are_quieter_than_warnings() {
        let missing = Diagnostic::SystemNotInCatalog {
            system: "MAME".into(),
        };
        let skipped = Diagnostic::CatalogSkipped {
            path: PathBuf::from("x.csv"),
            reason: "bad utf-8".into(),
        };
        assert!(missing.level() < skipped.level());
    }
}
