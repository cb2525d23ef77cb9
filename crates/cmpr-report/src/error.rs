//! Error types for the report crate.

use std::path::PathBuf;

/// Errors that can occur while configuring a reporter.
///
/// Reporting itself never fails; protocol violations by the driving
/// engine panic instead.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A configuration file could not be read.
    #[error("failed to read configuration {path:?}: {source}")]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// A configuration document is not valid TOML for [`ReporterConfig`](crate::ReporterConfig).
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A configuration could not be rendered as TOML.
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Convenience alias for report results.
pub type ReportResult<T> = Result<T, ReportError>;
