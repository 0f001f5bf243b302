use serde::{Deserialize, Serialize};

use enforcer_util::errors::EnforcerError;

/// Rendering options for the generated XML fragments.
///
/// Loaded from TOML, e.g.:
///
/// ```toml
/// indent = 2
/// header = "Pinned by enforcer-helper"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct XmlConfig {
    /// Spaces per nesting level.
    #[serde(default = "default_indent")]
    pub indent: usize,
    /// Text of the comment that opens the properties fragment.
    #[serde(default = "default_header")]
    pub header: String,
}

impl Default for XmlConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            header: default_header(),
        }
    }
}

fn default_indent() -> usize {
    4
}

fn default_header() -> String {
    "Dependency convergence overrides".to_string()
}

impl XmlConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, EnforcerError> {
        toml::from_str(content).map_err(|e| EnforcerError::Config {
            message: e.to_string(),
        })
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub(crate) fn pad(&self, level: usize) -> String {
        " ".repeat(self.indent * level)
    }
}
