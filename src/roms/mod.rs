pub mod discover;

pub use discover::{RomIndex, discover_roms};
