use std::path::PathBuf;

use crate::{
    catalog::default_catalog_dir,
    cli::Cli,
    select::{DEFAULT_REGION_ORDER, DEFAULT_THUMBNAIL_ORDER},
    types::ThumbnailType,
};

#[derive(Debug, Clone, serde::Serialize)]
pub struct Config {
    pub rom_path: PathBuf,
    pub catalog_dir: PathBuf,
    pub thumbnail_order: Vec<ThumbnailType>,
    pub region_priority: Vec<String>,
    pub print_plan: bool,
    pub verbose: u8,
    pub quiet: u8,
}

impl Config {
    /// Diagnostic level threshold: warnings print at 1, detail at 2.
    pub fn verbosity(&self) -> u8 {
        1u8.saturating_add(self.verbose).saturating_sub(self.quiet)
    }
}

/// Parse a comma separated thumbnail order. Blank input means the default
/// order; any unknown token is an error.
pub fn parse_thumbnail_order(value: &str) -> anyhow::Result<Vec<ThumbnailType>> {
    if value.trim().is_empty() {
        return Ok(DEFAULT_THUMBNAIL_ORDER.to_vec());
    }

    let mut order = Vec::new();
    for token in value.split(',').map(str::trim) {
        let thumbnail_type: ThumbnailType = token.parse()?;
        if !order.contains(&thumbnail_type) {
            order.push(thumbnail_type);
        }
    }
    Ok(order)
}

/// Parse a comma separated region list: trimmed, lowercased, empty items
/// dropped, duplicates collapsed. Falls back to the default order when
/// nothing remains.
pub fn parse_region_priority(value: &str) -> Vec<String> {
    let mut regions: Vec<String> = Vec::new();
    for region in value
        .split(',')
        .map(|r| r.trim().to_lowercase())
        .filter(|r| !r.is_empty())
    {
        if !regions.contains(&region) {
            regions.push(region);
        }
    }

    if regions.is_empty() {
        DEFAULT_REGION_ORDER.iter().map(|r| r.to_string()).collect()
    } else {
        regions
    }
}

impl TryFrom<Cli> for Config {
    type Error = anyhow::Error;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let thumbnail_order = parse_thumbnail_order(&cli.thumbnail_order)?;
        let region_priority = parse_region_priority(&cli.region_priority);

        Ok(Self {
            rom_path: cli.rom_path,
            catalog_dir: cli.catalog.unwrap_or_else(default_catalog_dir),
            thumbnail_order,
            region_priority,
            print_plan: cli.print_plan,
            verbose: cli.verbose,
            quiet: cli.quiet,
        })
    }
}
