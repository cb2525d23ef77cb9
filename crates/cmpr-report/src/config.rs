//! Output limits for diff reports, loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};

/// Stored diff text stops growing once it reaches this many bytes.
pub const DEFAULT_MAX_BYTES: usize = 4096;

/// Stored diff text stops growing once it reaches this many lines.
pub const DEFAULT_MAX_LINES: usize = 256;

/// Output limits for a diff report.
///
/// Once the stored text reaches either limit, further differences are
/// counted but no longer rendered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReporterConfig {
    /// Byte limit on stored diff text.
    pub max_bytes: usize,
    /// Newline limit on stored diff text.
    pub max_lines: usize,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            max_lines: DEFAULT_MAX_LINES,
        }
    }
}

impl ReporterConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> ReportResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> ReportResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Render as a TOML document.
    pub fn to_toml_string(&self) -> ReportResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject limits that would make every report empty.
    pub fn validate(&self) -> ReportResult<()> {
        if self.max_bytes == 0 {
            return Err(ReportError::InvalidConfig(
                "max_bytes must be greater than zero".into(),
            ));
        }
        if self.max_lines == 0 {
            return Err(ReportError::InvalidConfig(
                "max_lines must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
