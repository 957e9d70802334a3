use thiserror::Error;
use url::Url;

/// Connection settings for the question-generation model server.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InferenceSettings {
    base_url: Option<String>,
    api_key: Option<String>,
    model: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct InferenceSettingsDraft {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InferenceSettingsError {
    #[error("invalid base URL")]
    InvalidBaseUrl,
}

impl InferenceSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and normalize the draft.
    ///
    /// # Errors
    ///
    /// Returns `InferenceSettingsError` if the base URL is present but invalid.
    pub fn validate(self) -> Result<InferenceSettings, InferenceSettingsError> {
        let base_url = normalize_optional(self.base_url);
        let api_key = normalize_optional(self.api_key);
        let model = normalize_optional(self.model);

        if let Some(url) = base_url.as_ref() {
            if Url::parse(url).is_err() {
                return Err(InferenceSettingsError::InvalidBaseUrl);
            }
        }

        Ok(InferenceSettings {
            base_url,
            api_key,
            model,
        })
    }
}

impl InferenceSettings {
    /// Without a base URL there is no model server to talk to.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.base_url.is_some()
    }

    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    #[must_use]
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
