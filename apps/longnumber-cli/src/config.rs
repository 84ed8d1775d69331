//! # CLI Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority, applied by the caller)       │
//! │     --format json                                                      │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     LONGNUMBER_FORMAT=json                                             │
//! │     LONGNUMBER_KIND=currency                                           │
//! │     LONGNUMBER_LOG=longnumber_cli=debug                                │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config PATH, or                                                  │
//! │     ~/.config/longnumber/longnumber.toml (Linux)                       │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     text output, number conversion, "warn" logging                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [output]
//! format = "json"    # text | json
//! kind = "currency"  # number | currency | scale
//!
//! [log]
//! filter = "longnumber_cli=debug"
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use longnumber_core::ConversionKind;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

pub const ENV_FORMAT: &str = "LONGNUMBER_FORMAT";
pub const ENV_KIND: &str = "LONGNUMBER_KIND";
pub const ENV_LOG: &str = "LONGNUMBER_LOG";

const CONFIG_FILE_NAME: &str = "longnumber.toml";

// =============================================================================
// Output Format
// =============================================================================

/// How results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One line of words per input on stdout; errors on stderr.
    #[default]
    Text,

    /// One JSON object per input on stdout, successes and errors alike.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" | "jsonl" => Ok(OutputFormat::Json),
            other => Err(ConfigError::InvalidValue {
                key: "format".to_string(),
                value: other.to_string(),
                reason: "valid options: text, json".to_string(),
            }),
        }
    }
}

// =============================================================================
// Settings
// =============================================================================

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,

    /// Conversion used when the command line does not name one.
    #[serde(default)]
    pub kind: ConversionKind,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSettings {
    /// `EnvFilter` directive. `RUST_LOG` still wins when set.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "warn".to_string()
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            filter: default_filter(),
        }
    }
}

// =============================================================================
// Main CLI Configuration
// =============================================================================

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub output: OutputSettings,

    #[serde(default)]
    pub log: LogSettings,
}

impl CliConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file: `explicit_path` must exist; the platform default
    ///    path is used only if present
    /// 3. Environment variables
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        EnvFilter::try_new(&self.log.filter)
            .map_err(|e| ConfigError::InvalidFilter(format!("{}: {}", self.log.filter, e)))?;
        Ok(())
    }

    /// Applies environment overrides, reading variables through `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(format) = lookup(ENV_FORMAT) {
            self.output.format = format.parse()?;
        }

        if let Some(kind) = lookup(ENV_KIND) {
            self.output.kind = kind.parse().map_err(|e: longnumber_core::UnknownKind| {
                ConfigError::InvalidValue {
                    key: ENV_KIND.to_string(),
                    value: kind.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(filter) = lookup(ENV_LOG) {
            self.log.filter = filter;
        }

        Ok(())
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "longnumber", "longnumber")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Invalid log filter {0}")]
    InvalidFilter(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.output.kind, ConversionKind::Number);
        assert_eq!(config.log.filter, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[output]\nformat = \"json\"\nkind = \"currency\"\n\n[log]\nfilter = \"debug\""
        )
        .unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.kind, ConversionKind::Currency);
        assert_eq!(config.log.filter, "debug");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nkind = \"scale\"").unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.output.kind, ConversionKind::Scale);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.log.filter, "warn");
    }

    #[test]
    fn test_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nformat = \"xml\"").unwrap();
        assert!(matches!(
            CliConfig::from_file(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            CliConfig::load(Some(path.as_path())),
            Err(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = CliConfig::default();
        config
            .apply_env_overrides(env(&[
                (ENV_FORMAT, "json"),
                (ENV_KIND, "currency"),
                (ENV_LOG, "longnumber_cli=trace"),
            ]))
            .unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.kind, ConversionKind::Currency);
        assert_eq!(config.log.filter, "longnumber_cli=trace");
    }

    #[test]
    fn test_bad_env_values() {
        let mut config = CliConfig::default();
        assert!(config
            .apply_env_overrides(env(&[(ENV_FORMAT, "xml")]))
            .is_err());
        assert!(config
            .apply_env_overrides(env(&[(ENV_KIND, "roman")]))
            .is_err());
    }

    #[test]
    fn test_invalid_filter() {
        let mut config = CliConfig::default();
        config.log.filter = "longnumber=loud".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidFilter(_))
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = CliConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[output]"));
        assert!(toml_str.contains("[log]"));
        assert_eq!(toml::from_str::<CliConfig>(&toml_str).unwrap(), config);
    }
}
