//! Provider configuration from TOML (`[provider]` section)

use medinfo_domain::Model;
use serde::{Deserialize, Serialize};

/// Base URL of the Gemini REST API
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variable holding the API key
pub const DEFAULT_API_KEY_ENV: &str = "API_KEY";

/// Checked when the configured variable is unset
pub const FALLBACK_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Raw provider configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Model name; unknown names are passed through as-is
    pub model: Option<String>,
    /// API base URL
    pub endpoint: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    /// Let the model ground its answer with web search
    pub web_search: bool,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            model: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            web_search: true,
        }
    }
}

impl FileProviderConfig {
    /// Configured model, or the default one
    pub fn parse_model(&self) -> Model {
        match self.model.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => {
                let Ok(model) = name.parse();
                model
            }
            _ => Model::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_model_custom_passthrough() {
        let config = FileProviderConfig {
            model: Some("gemini-exp-1206".to_string()),
            ..Default::default()
        };
        assert_eq!(config.parse_model().as_str(), "gemini-exp-1206");
    }

    #[test]
    fn test_parse_model_blank_falls_back_to_default() {
        let config = FileProviderConfig {
            model: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(config.parse_model(), Model::default());
    }
}
