//! Spinner shown on stderr while a directory scan runs.

use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "];

/// Run `scan` with a spinner labelled `label`, clearing it before returning.
///
/// The spinner is drawn only when `enabled` is set and stderr is a terminal
/// without `NO_COLOR` or `ETA_NO_PROGRESS`. The spinner is cleared even if
/// `scan` unwinds.
pub(crate) fn scanning<T>(enabled: bool, label: String, scan: impl FnOnce() -> T) -> T {
    let _spinner = enabled.then(|| SpinnerGuard::start(label)).flatten();
    scan()
}

struct SpinnerGuard(ProgressBar);

impl SpinnerGuard {
    fn start(label: String) -> Option<Self> {
        if !spinner_allowed(
            std::io::stderr().is_terminal(),
            std::env::var_os("NO_COLOR").is_some(),
            std::env::var_os("ETA_NO_PROGRESS").is_some(),
        ) {
            return None;
        }
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}").ok()?;
        let bar = ProgressBar::new_spinner().with_style(style.tick_strings(TICKS));
        bar.set_message(label);
        bar.enable_steady_tick(Duration::from_millis(80));
        Some(Self(bar))
    }
}

impl Drop for SpinnerGuard {
    fn drop(&mut self) {
        self.0.finish_and_clear();
    }
}

fn spinner_allowed(terminal: bool, no_color: bool, opted_out: bool) -> bool {
    terminal && !no_color && !opted_out
}
