use std::io::{IsTerminal, stderr};

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const COMMAND_BAR_TEMPLATE: &str =
    "{prefix} [{bar:40}] {pos:>5}/{len:<5} | {percent:>3}% | {elapsed_precise}";

fn stderr_supports_progress() -> bool {
    stderr().is_terminal()
}

/// Bar tracking emitted commands. Hidden unless stderr is a terminal and
/// the run is not quiet.
pub fn command_bar(len: usize, verbosity: u8) -> ProgressBar {
    let bar = ProgressBar::with_draw_target(Some(len as u64), ProgressDrawTarget::hidden());
    if verbosity == 0 || !stderr_supports_progress() {
        return bar;
    }

    if let Ok(style) = ProgressStyle::with_template(COMMAND_BAR_TEMPLATE) {
        bar.set_style(style.progress_chars("=> "));
    }
    bar.set_prefix("Processing commands");
    bar.set_draw_target(ProgressDrawTarget::stderr());
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_bar_stays_hidden() {
        let bar = command_bar(3, 0);
        assert!(bar.is_hidden());
        assert_eq!(bar.length(), Some(3));
    }
}
