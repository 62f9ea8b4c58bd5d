//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod behavior;
mod log;
mod output;
mod provider;
mod repl;

pub use behavior::{DEFAULT_TIMEOUT_SECONDS, FileBehaviorConfig};
pub use log::FileLogConfig;
pub use output::FileOutputConfig;
pub use provider::{DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, FALLBACK_API_KEY_ENV, FileProviderConfig};
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("behavior.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("provider.model cannot be empty")]
    EmptyModelName,

    #[error("provider.endpoint cannot be empty")]
    EmptyEndpoint,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// LLM provider settings
    pub provider: FileProviderConfig,
    /// Request behavior
    pub behavior: FileBehaviorConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Transcript settings
    pub log: FileLogConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.behavior.timeout_seconds == Some(0) {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if let Some(model) = &self.provider.model
            && model.trim().is_empty()
        {
            return Err(ConfigValidationError::EmptyModelName);
        }

        if self.provider.endpoint.trim().is_empty() {
            return Err(ConfigValidationError::EmptyEndpoint);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medinfo_domain::{Model, OutputFormat};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[provider]
model = "gemini-2.5-pro"
endpoint = "http://localhost:8080/v1beta"
api_key_env = "MY_GEMINI_KEY"
web_search = false

[behavior]
timeout_seconds = 30

[output]
format = "content"
color = false

[repl]
show_progress = false
history_file = "~/.local/share/medinfo/history.txt"

[log]
transcript = "/tmp/medinfo.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.provider.parse_model(), Model::Gemini25Pro);
        assert_eq!(config.provider.endpoint, "http://localhost:8080/v1beta");
        assert_eq!(config.provider.api_key_env, "MY_GEMINI_KEY");
        assert!(!config.provider.web_search);
        assert_eq!(config.behavior.timeout().as_secs(), 30);
        assert_eq!(config.output.format, Some(OutputFormat::Content));
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
        assert_eq!(
            config.log.transcript.as_deref(),
            Some("/tmp/medinfo.jsonl")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[provider]
model = "gemini-2.5-flash"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.provider.parse_model(), Model::Gemini25Flash);
        // Defaults should apply
        assert_eq!(config.provider.endpoint, DEFAULT_ENDPOINT);
        assert!(config.provider.web_search);
        assert_eq!(config.behavior.timeout().as_secs(), DEFAULT_TIMEOUT_SECONDS);
        assert!(config.output.color);
        assert!(config.repl.show_progress);
        assert!(config.log.transcript.is_none());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.provider.model.is_none());
        assert_eq!(config.provider.parse_model(), Model::default());
        assert_eq!(config.provider.api_key_env, DEFAULT_API_KEY_ENV);
        assert!(config.output.format.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let toml_str = r#"
[behavior]
timeout_seconds = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));
    }

    #[test]
    fn test_validate_empty_model_name() {
        let toml_str = r#"
[provider]
model = "  "
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyModelName));
    }

    #[test]
    fn test_validate_empty_endpoint() {
        let toml_str = r#"
[provider]
endpoint = ""
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyEndpoint));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let toml_str = r#"
[output]
format = "html"
"#;
        assert!(toml::from_str::<FileConfig>(toml_str).is_err());
    }
}
