//! CLI configuration management.
//!
//! Simulation defaults are read from an optional TOML file, then
//! environment variables, then explicit command-line flags (highest).
//!
//! ```toml
//! n_paths = 50000
//! n_steps = 100
//! seed = 42
//! log_level = "info"
//! format = "table"
//! ```

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Output format for results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// Header line plus one CSV row
    Csv,
}

/// CLI configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Default number of Monte Carlo paths
    pub n_paths: usize,
    /// Default number of time steps per path
    pub n_steps: usize,
    /// Default seed
    pub seed: u64,
    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,
    /// Default output format
    pub format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            n_paths: 10_000,
            n_steps: 100,
            seed: 42,
            log_level: "info".to_string(),
            format: OutputFormat::Table,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from `path` if it exists, otherwise start from defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(mut self) -> Self {
        if let Some(n_paths) = env_parse("LOOKBACK_PATHS") {
            self.n_paths = n_paths;
        }

        if let Some(n_steps) = env_parse("LOOKBACK_STEPS") {
            self.n_steps = n_steps;
        }

        if let Some(seed) = env_parse("LOOKBACK_SEED") {
            self.seed = seed;
        }

        if let Ok(log_level) = std::env::var("LOOKBACK_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Ok(format) = std::env::var("LOOKBACK_FORMAT") {
            self.format = match format.to_lowercase().as_str() {
                "table" => OutputFormat::Table,
                "json" => OutputFormat::Json,
                "csv" => OutputFormat::Csv,
                _ => self.format,
            };
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if self.n_paths == 0 {
            errors.push("n_paths must be greater than 0".to_string());
        }

        if self.n_steps == 0 {
            errors.push("n_steps must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file (if present) with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override();
        config.validate()?;
        Ok(config)
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

/// Configuration error type
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.n_paths, 10_000);
        assert_eq!(config.n_steps, 100);
        assert_eq!(config.seed, 42);
        assert_eq!(config.format, OutputFormat::Table);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "n_paths = 50000\nformat = \"json\"").unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.n_paths, 50_000);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.n_steps, 100);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "n_paths = \"many\"").unwrap();

        assert!(matches!(
            CliConfig::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.n_paths, CliConfig::default().n_paths);
    }

    #[test]
    fn test_env_override() {
        std::env::set_var("LOOKBACK_STEPS", "252");
        std::env::set_var("LOOKBACK_FORMAT", "csv");
        let config = CliConfig::default().with_env_override();
        assert_eq!(config.n_steps, 252);
        assert_eq!(config.format, OutputFormat::Csv);
        std::env::remove_var("LOOKBACK_STEPS");
        std::env::remove_var("LOOKBACK_FORMAT");
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let config = CliConfig {
            log_level: "verbose".to_string(),
            ..Default::default()
        };

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert!(errors.iter().any(|e| e.contains("log_level")));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_zero_counts() {
        let config = CliConfig {
            n_paths: 0,
            n_steps: 0,
            ..Default::default()
        };

        match config.validate() {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_valid_log_levels() {
        for level in &["trace", "debug", "info", "warn", "error", "INFO"] {
            let config = CliConfig {
                log_level: level.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_ok(), "Log level '{}' should be valid", level);
        }
    }
}
