use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "rom-thumbnails",
    version,
    about = "Match a ROM collection against libretro-thumbnails catalogs and print download commands",
    after_help = "\
Thumbnail types:
  snapshot      In-game snapshots, aka gameplay screenshots
  boxart        Scans of the boxes or covers of games
  title_screen  Images of the game's introductory title screen

Examples:
  rom-thumbnails /path/to/roms
  rom-thumbnails /path/to/roms --thumbnail-order title_screen,boxart
  rom-thumbnails /path/to/roms --region-priority japan,usa,europe"
)]
pub struct Cli {
    /// Path to the ROM collection (one subdirectory per system)
    #[arg(value_name = "ROM_PATH")]
    pub rom_path: PathBuf,

    /// Priority order for thumbnail types, comma separated
    #[arg(
        long = "thumbnail-order",
        value_name = "TYPES",
        default_value = "snapshot,boxart,title_screen"
    )]
    pub thumbnail_order: String,

    /// Priority order for regions as they appear in titles, comma separated
    #[arg(
        long = "region-priority",
        value_name = "REGIONS",
        default_value = "usa,europe,world"
    )]
    pub region_priority: String,

    /// Directory holding one <System>.csv catalog per system
    #[arg(long = "catalog", value_name = "DIR")]
    pub catalog: Option<PathBuf>,

    /// Print the matched plan as JSON instead of download commands
    #[arg(long = "print-plan")]
    pub print_plan: bool,

    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,
}
