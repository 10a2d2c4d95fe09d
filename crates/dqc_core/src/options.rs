//! Options that steer a validation run and its report writers.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Symbols that break CSV or SQL encoding and are not expected in clean business text.
pub const DEFAULT_DENYLIST: &str = ",;'\"\\|<>{}[]^~`$%*!?#=";

/// Configuration for the special character scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpecialCharConfig {
    /// Columns to scan; every string column of the schema when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,

    /// Disallowed characters
    #[serde(default = "default_denylist")]
    pub denylist: String,

    /// Also flag Unicode control characters (tab, newline, NUL, ...)
    #[serde(default = "default_flag_control")]
    pub flag_control: bool,
}

impl SpecialCharConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the scan to the given columns.
    pub fn with_columns(mut self, columns: Vec<String>) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Replaces the denylist.
    pub fn with_denylist(mut self, denylist: impl Into<String>) -> Self {
        self.denylist = denylist.into();
        self
    }

    /// Sets whether control characters are flagged.
    pub fn with_flag_control(mut self, flag_control: bool) -> Self {
        self.flag_control = flag_control;
        self
    }
}

impl Default for SpecialCharConfig {
    fn default() -> Self {
        Self {
            columns: None,
            denylist: default_denylist(),
            flag_control: true,
        }
    }
}

fn default_denylist() -> String {
    DEFAULT_DENYLIST.to_string()
}

fn default_flag_control() -> bool {
    true
}

/// Options for a validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOptions {
    /// Fail when a schema column is missing from the data instead of skipping it
    pub strict: bool,

    /// Overrides the schema's special character configuration
    pub special_characters: Option<SpecialCharConfig>,
}

impl CheckOptions {
    /// Creates options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets strict mode.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Overrides the special character configuration.
    pub fn with_special_characters(mut self, config: SpecialCharConfig) -> Self {
        self.special_characters = Some(config);
        self
    }
}

/// Which report writers to trigger after a run, and where they write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub generate_csv_report: bool,
    pub generate_pdf_report: bool,
    pub output_dir: PathBuf,
}

impl ReportOptions {
    /// Creates options with every writer disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the CSV report.
    pub fn with_csv_report(mut self, enabled: bool) -> Self {
        self.generate_csv_report = enabled;
        self
    }

    /// Enables or disables the PDF report.
    pub fn with_pdf_report(mut self, enabled: bool) -> Self {
        self.generate_pdf_report = enabled;
        self
    }

    /// Sets the directory reports are written to.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Returns true if any writer is enabled.
    pub fn any_enabled(&self) -> bool {
        self.generate_csv_report || self.generate_pdf_report
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            generate_csv_report: false,
            generate_pdf_report: false,
            output_dir: PathBuf::from("."),
        }
    }
}
