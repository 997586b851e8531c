use serde::Serialize;

use crate::catalog::load_catalog;
use crate::config::Config;
use crate::matcher::match_roms;
use crate::roms::discover_roms;
use crate::types::{Diagnostic, DownloadJob};

#[derive(Debug, Serialize)]
pub struct PlanSummary {
    pub catalog_systems: usize,
    pub roms_found: usize,
    pub downloads: usize,
    pub already_present: usize,
}

/// Everything one run decided: the downloads to perform and what was
/// noticed on the way.
#[derive(Debug, Serialize)]
pub struct DownloadPlan {
    pub config: Config,
    pub jobs: Vec<DownloadJob>,
    pub diagnostics: Vec<Diagnostic>,
    pub summary: PlanSummary,
}

/// Load the catalog, scan the ROM root and join the two.
pub fn build_plan(config: &Config) -> anyhow::Result<DownloadPlan> {
    vprintln!(config.verbosity(), 1, "Loading catalog data...");
    let catalog_load = load_catalog(
        &config.catalog_dir,
        &config.thumbnail_order,
        &config.region_priority,
    );
    vprintln!(
        config.verbosity(),
        2,
        "Loaded {} catalog systems from {}",
        catalog_load.catalog.len(),
        config.catalog_dir.display()
    );

    vprintln!(config.verbosity(), 1, "Discovering ROM files...");
    let rom_index = discover_roms(&config.rom_path)?;

    vprintln!(config.verbosity(), 1, "Generating download commands...");
    let outcome = match_roms(&catalog_load.catalog, &rom_index);

    let mut diagnostics = catalog_load.diagnostics;
    diagnostics.extend(rom_index.diagnostics.iter().cloned());
    diagnostics.extend(outcome.diagnostics);

    Ok(DownloadPlan {
        config: config.clone(),
        summary: PlanSummary {
            catalog_systems: catalog_load.catalog.len(),
            roms_found: rom_index.len(),
            downloads: outcome.jobs.len(),
            already_present: outcome.already_present,
        },
        jobs: outcome.jobs,
        diagnostics,
    })
}
