// src/types/mod.rs
//! Domain-specific newtypes for type safety and validation.

mod rich_text;

pub use rich_text::{
    plain_text_of, replace_runs, Annotations, Color, Link, RichTextContent, RichTextItem,
    TextContent,
};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Validation failures for domain newtypes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid API token: {reason}")]
    InvalidApiKey { reason: String },

    #[error("Invalid page id '{input}': {reason}")]
    InvalidPageId { input: String, reason: String },

    #[error("Invalid target language: {reason}")]
    InvalidLanguage { reason: String },
}

/// API token for a remote service.
///
/// Used for both the Notion integration token and the completion API key,
/// so no provider-specific prefix is enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Create a new API key with validation.
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key: String = key.into();
        if key.trim().is_empty() {
            return Err(ValidationError::InvalidApiKey {
                reason: "API token cannot be empty".to_string(),
            });
        }
        Ok(Self(key))
    }

    /// Get the API key as a string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Redact the token in display output
        let visible = self.0.chars().take(6).collect::<String>();
        write!(f, "{}...", visible)
    }
}

/// A Notion page identifier in canonical hyphenated UUID form.
///
/// Accepts both the hyphenated form and the compact 32-hex form that
/// appears at the end of Notion share URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PageId(String);

impl PageId {
    /// Parse and normalize a page id.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let uuid = Uuid::parse_str(input.trim()).map_err(|e| ValidationError::InvalidPageId {
            input: input.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self(uuid.hyphenated().to_string()))
    }

    /// Get the id as a string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PageId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PageId> for String {
    fn from(id: PageId) -> Self {
        id.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The language a page should be translated into.
///
/// Free text interpolated into the completion prompt ("Chinese", "fr", ...),
/// so the only constraints are non-emptiness and a sane length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLanguage(String);

impl TargetLanguage {
    /// Longest accepted language descriptor.
    const MAX_LENGTH: usize = 64;

    /// Create a target language with validation.
    pub fn new(language: impl Into<String>) -> Result<Self, ValidationError> {
        let language: String = language.into();
        let language = language.trim().to_string();
        if language.is_empty() {
            return Err(ValidationError::InvalidLanguage {
                reason: "language cannot be empty".to_string(),
            });
        }
        if language.len() > Self::MAX_LENGTH {
            return Err(ValidationError::InvalidLanguage {
                reason: format!("language exceeds {} characters", Self::MAX_LENGTH),
            });
        }
        Ok(Self(language))
    }

    /// Get the language as a string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
