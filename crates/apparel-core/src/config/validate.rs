//! Configuration validation.

use crate::error::ConfigError;

use super::{Config, GeminiConfig};

impl Config {
    /// Validate configuration values.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        self.gemini.validate()?;
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::ValidationError(format!(
                "logging.format must be \"pretty\" or \"json\", got '{}'",
                self.logging.format
            )));
        }
        Ok(())
    }
}

impl GeminiConfig {
    /// Check endpoint and model, including values set after the file was loaded.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = &self.endpoint;
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigError::ValidationError(format!(
                "gemini.endpoint must be an http(s) URL, got '{endpoint}'"
            )));
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "gemini.model must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_http_endpoint() {
        let mut config = Config::default();
        config.gemini.endpoint = "generativelanguage.googleapis.com".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("gemini.endpoint"));
    }

    #[test]
    fn test_validate_rejects_empty_model() {
        let mut config = Config::default();
        config.gemini.model = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("gemini.model"));
    }

    #[test]
    fn test_validate_rejects_unknown_log_format() {
        let mut config = Config::default();
        config.logging.format = "xml".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("logging.format"));
    }
}
