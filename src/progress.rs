//! Progress bars for the parallel phases.
//!
//! Bars are drawn on stderr and only when it is a terminal, so piped JSON
//! output and CI logs stay clean. `--plain` or `FORMSHIFT_QUIET` hides them.

use indicatif::{ProgressBar, ProgressStyle};

pub const TEMPLATE_FILE_ANALYSIS: &str = "{msg} {pos}/{len} files ({percent}%) - {eta}";

/// Configuration for progress display behavior
#[derive(Debug, Clone, Default)]
pub struct ProgressConfig {
    pub quiet_mode: bool,
}

impl ProgressConfig {
    pub fn from_env(quiet: bool) -> Self {
        let env_quiet = std::env::var("FORMSHIFT_QUIET").is_ok();
        Self {
            quiet_mode: quiet || env_quiet,
        }
    }

    pub fn should_show_progress(&self) -> bool {
        if self.quiet_mode {
            return false;
        }

        use std::io::IsTerminal;
        std::io::stderr().is_terminal()
    }

    /// A bar of `len` steps, or a hidden one when progress is off.
    pub fn create_bar(&self, len: u64, msg: &'static str) -> ProgressBar {
        if !self.should_show_progress() {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len);
        match ProgressStyle::default_bar().template(TEMPLATE_FILE_ANALYSIS) {
            Ok(style) => pb.set_style(style.progress_chars("█▓▒░  ")),
            Err(e) => log::debug!("Invalid progress template: {e}"),
        }
        pb.set_message(msg);
        pb
    }
}
