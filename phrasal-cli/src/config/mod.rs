//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Extraction configuration
    #[serde(default)]
    pub extract: ExtractConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Extraction-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Drop noun phrases seen fewer times than this
    pub min_count: usize,

    /// Keep only the N most frequent noun phrases (0 = all)
    pub top: usize,

    /// Parse sentences on a thread pool
    pub parallel: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            min_count: 1,
            top: 0,
            parallel: false,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.extract.min_count, 1);
        assert_eq!(config.extract.top, 0);
        assert!(!config.extract.parallel);
        assert_eq!(config.output.default_format, "text");
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = CliConfig::from_toml_str(
            r#"
            [extract]
            top = 10

            [output]
            default_format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.extract.top, 10);
        assert_eq!(config.extract.min_count, 1);
        assert_eq!(config.output.default_format, "json");
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_empty_file_is_default() {
        let config = CliConfig::from_toml_str("").unwrap();
        assert_eq!(config.extract.min_count, 1);
    }

    #[test]
    fn test_invalid_type_rejected() {
        let err = CliConfig::from_toml_str("[extract]\ntop = \"many\"\n").unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "[extract]\nmin_count = 3\nparallel = true\n").unwrap();

        let config = CliConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.extract.min_count, 3);
        assert!(config.extract.parallel);
    }

    #[test]
    fn test_from_missing_file() {
        let err = CliConfig::from_file(Path::new("/nonexistent/phrasal.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
