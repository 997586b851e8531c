// Lightweight verbosity-gated logging helper used throughout the crate.
#[macro_export]
macro_rules! vprintln {
	($verbose:expr, $level:expr, $($arg:tt)*) => {
		if $verbose >= $level {
			eprintln!($($arg)*);
		}
	};
}

// Public library re-exports for integration tests and external use.
pub mod catalog;
pub mod cli;
pub mod command;
pub mod config;
pub mod game_console;
pub mod matcher;
pub mod normalize;
pub mod plan;
pub mod progress;
pub mod roms;
pub mod select;
pub mod types;
