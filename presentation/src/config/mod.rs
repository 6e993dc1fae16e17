//! Presentation-level configuration
//!
//! Resolved output settings: the `[output]` file section with command-line
//! flags applied on top.

use crate::cli::OutputFormat;
use council_domain::OutputFormat as DomainOutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: DomainOutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Show progress indicators during debates
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: DomainOutputFormat::Text,
            color: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    pub fn new(format: Option<DomainOutputFormat>, color: bool, show_progress: bool) -> Self {
        Self {
            format: format.unwrap_or_default(),
            color,
            show_progress,
        }
    }

    /// Apply `--output` and `--quiet`; JSON output never shows progress.
    pub fn with_cli_overrides(mut self, output: Option<OutputFormat>, quiet: bool) -> Self {
        if let Some(format) = output {
            self.format = format.into();
        }
        if quiet || self.format == DomainOutputFormat::Json {
            self.show_progress = false;
        }
        self
    }
}
