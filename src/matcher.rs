use std::path::Path;

use crate::catalog::Catalog;
use crate::command::destination_for;
use crate::roms::RomIndex;
use crate::types::{Diagnostic, DownloadJob};

#[derive(Debug, Default)]
pub struct MatchOutcome {
    pub jobs: Vec<DownloadJob>,
    /// Matches skipped because the image is already on disk.
    pub already_present: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Pair ROMs with catalog images using the real filesystem for the
/// destination check.
pub fn match_roms(catalog: &Catalog, roms: &RomIndex) -> MatchOutcome {
    match_roms_with(catalog, roms, |path| path.exists())
}

/// Pair each ROM with the image selected for its (system, key).
///
/// Systems unknown to the catalog are reported once; ROMs without an image
/// are skipped silently, as are matches whose destination `exists`.
pub fn match_roms_with<F>(catalog: &Catalog, roms: &RomIndex, exists: F) -> MatchOutcome
where
    F: Fn(&Path) -> bool,
{
    let mut outcome = MatchOutcome::default();

    for (system, entries) in roms.systems() {
        let Some(images) = catalog.system(system) else {
            outcome.diagnostics.push(Diagnostic::SystemNotInCatalog {
                system: system.to_string(),
            });
            continue;
        };

        for rom in entries {
            let Some(image) = images.get(&rom.key) else {
                continue;
            };

            let destination = destination_for(&rom.path, &image.url);
            if exists(&destination) {
                outcome.already_present += 1;
                continue;
            }

            outcome.jobs.push(DownloadJob {
                system: system.to_string(),
                key: rom.key.clone(),
                rom: rom.path.clone(),
                url: image.url.clone(),
                destination,
            });
        }
    }

    outcome
}
