//! Configuration structures for the extraction pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FlightpassError, Result};

/// Main configuration for the flightpass pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightpassConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Input document configuration.
    pub input: InputConfig,

    /// Report output configuration.
    pub output: OutputConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Carriers checked after the built-in list, in priority order.
    pub extra_carriers: Vec<CarrierConfig>,
}

/// A user-supplied carrier for airline detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierConfig {
    /// Display name written to the airline field.
    pub name: String,

    /// Name tokens searched for in the text (case-insensitive).
    #[serde(default)]
    pub tokens: Vec<String>,

    /// Two-character flight-number prefix.
    #[serde(default)]
    pub prefix: Option<String>,
}

/// Input document configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// File extensions picked up by batch processing.
    pub extensions: Vec<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["txt".to_string(), "eml".to_string()],
        }
    }
}

impl InputConfig {
    /// Whether a path has one of the accepted extensions.
    pub fn accepts(&self, path: &Path) -> bool {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext))
    }
}

/// Report output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Add a `source_file` column to reports.
    pub include_source: bool,

    /// Add an `extraction_time` column to reports.
    pub include_timestamp: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            include_source: true,
            include_timestamp: true,
        }
    }
}

impl FlightpassConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            FlightpassError::Config(format!("{}: {}", path.display(), e))
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| FlightpassError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: FlightpassConfig = serde_json::from_str(
            r#"{"extraction": {"extra_carriers": [{"name": "Akasa Air", "prefix": "QP"}]}}"#,
        )
        .unwrap();

        assert_eq!(config.extraction.extra_carriers.len(), 1);
        assert_eq!(config.extraction.extra_carriers[0].tokens, Vec::<String>::new());
        assert_eq!(config.input.extensions, vec!["txt", "eml"]);
        assert!(config.output.include_source);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = FlightpassConfig::default();
        config.output.include_timestamp = false;
        config.save(&path).unwrap();

        let loaded = FlightpassConfig::from_file(&path).unwrap();
        assert!(!loaded.output.include_timestamp);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            FlightpassConfig::from_file(&path),
            Err(FlightpassError::Config(_))
        ));
    }

    #[test]
    fn test_accepts_extensions_case_insensitively() {
        let input = InputConfig::default();
        assert!(input.accepts(Path::new("pass.TXT")));
        assert!(input.accepts(Path::new("mail/booking.eml")));
        assert!(!input.accepts(Path::new("scan.png")));
    }
}
