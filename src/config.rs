use crate::error::{Result, StudioError};
use crate::models::OutputFormat;
use std::env;

pub const API_KEY_VAR: &str = "API_KEY";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_EDIT_MODEL: &str = "gemini-2.5-flash-image-preview";
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-4.0-generate-001";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub api_base: String,
    pub edit_model: String,
    pub image_model: String,
    pub output_format: OutputFormat,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        GeminiConfig {
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            edit_model: DEFAULT_EDIT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            output_format: OutputFormat::Png,
        }
    }

    /// Reads the credential once from the process environment, after loading
    /// a `.env` file if one exists. A missing or blank key is fatal.
    pub fn from_env() -> Result<Self> {
        match dotenv::dotenv() {
            Ok(path) => log::debug!("Loaded environment from {}", path.display()),
            Err(_) => log::debug!("No .env file found, using process environment"),
        }

        let api_key = env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| StudioError::MissingCredential(API_KEY_VAR.to_string()))?;

        Ok(Self::new(api_key))
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_edit_model(mut self, model: impl Into<String>) -> Self {
        self.edit_model = model.into();
        self
    }

    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(StudioError::MissingCredential(API_KEY_VAR.to_string()));
        }
        if !self.api_base.starts_with("http://") && !self.api_base.starts_with("https://") {
            return Err(StudioError::Config(format!(
                "api_base must be an http(s) URL, got '{}'",
                self.api_base
            )));
        }
        if self.edit_model.is_empty() || self.image_model.is_empty() {
            return Err(StudioError::Config("model names must not be empty".into()));
        }
        Ok(())
    }

    pub(crate) fn endpoint(&self, model: &str, method: &str) -> String {
        format!("{}/models/{}:{}", self.api_base, model, method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = GeminiConfig::new("key")
            .with_api_base("http://localhost:9000/v1beta/")
            .with_image_model("imagen-test");

        assert_eq!(config.api_base, "http://localhost:9000/v1beta");
        assert_eq!(config.edit_model, DEFAULT_EDIT_MODEL);
        assert_eq!(
            config.endpoint(&config.image_model, "predict"),
            "http://localhost:9000/v1beta/models/imagen-test:predict"
        );
    }

    #[test]
    fn blank_key_fails_validation() {
        let err = GeminiConfig::new("  ").validate().unwrap_err();
        assert!(matches!(err, StudioError::MissingCredential(var) if var == API_KEY_VAR));
    }

    #[test]
    fn non_http_base_fails_validation() {
        let err = GeminiConfig::new("key")
            .with_api_base("ftp://example.test")
            .validate()
            .unwrap_err();
        assert!(matches!(err, StudioError::Config(_)));
    }
}
