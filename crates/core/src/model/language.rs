use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Language the tutorial speaks to the user in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Telugu,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LanguageError {
    #[error("unknown tutorial language: {0}")]
    Unknown(String),
}

impl Language {
    /// Persisted identifier (`"english"` or `"telugu"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Telugu => "telugu",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" => Ok(Language::English),
            "telugu" => Ok(Language::Telugu),
            _ => Err(LanguageError::Unknown(s.to_string())),
        }
    }
}
