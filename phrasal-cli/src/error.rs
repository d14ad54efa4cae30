//! Error handling for the CLI application

use thiserror::Error;

/// CLI-specific failures not covered by the core library
#[derive(Debug, Error)]
pub enum CliError {
    /// No input file matched the given patterns
    #[error("No files found matching the provided patterns")]
    NoInputFiles,
    /// Invalid file pattern
    #[error("Invalid file pattern: {0}")]
    InvalidPattern(String),
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Lexicon could not be loaded or failed validation
    #[error("Lexicon error: {0}")]
    LexiconError(String),
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_input_files_display() {
        assert_eq!(
            CliError::NoInputFiles.to_string(),
            "No files found matching the provided patterns"
        );
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("unknown output format 'xml'".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: unknown output format 'xml'"
        );
    }

    #[test]
    fn test_lexicon_error_display() {
        let error = CliError::LexiconError("invalid lexicon: blank code".to_string());
        assert!(error.to_string().starts_with("Lexicon error:"));
    }

    #[test]
    fn test_converts_into_anyhow() {
        let result: CliResult<()> = Err(CliError::NoInputFiles.into());
        let err = result.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert!(err.to_string().contains("No files found"));
    }
}
