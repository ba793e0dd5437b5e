use serde::Deserialize;

use crate::error::TourResult;

/// Settings compiled into every demo binary.
pub const EMBEDDED_SETTINGS: &str = r#"
color = true
log_level = "warn"
"#;

/// Presentation settings shared by every demo.
///
/// Demos load [`EMBEDDED_SETTINGS`]; missing keys fall back to
/// [`TourConfig::default`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    /// Colour section headings.
    pub color: bool,
    /// Filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            color: true,
            log_level: "warn".to_string(),
        }
    }
}

impl TourConfig {
    pub fn from_toml_str(content: &str) -> TourResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn embedded() -> TourResult<Self> {
        Self::from_toml_str(EMBEDDED_SETTINGS)
    }

    /// Apply the colour setting process-wide.
    pub fn apply(&self) {
        if self.color {
            colored::control::unset_override();
        } else {
            colored::control::set_override(false);
        }
    }
}
