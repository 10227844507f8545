// src/config.rs
//! Service configuration: command line plus a TOML settings file.

use crate::constants::{DEFAULT_COMPLETION_BASE_URL, DEFAULT_NOTION_BASE_URL, NOTION_VERSION};
use crate::error::AppError;
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Path to the TOML settings file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// How the translate endpoint runs the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslateMode {
    /// Reply immediately and translate in a spawned task, appending
    /// each block as soon as it is translated.
    #[default]
    Deferred,
    /// Translate the whole page inside the request, then upload it in
    /// batches; the reply carries the new page id.
    Inline,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_notion_base_url() -> String {
    DEFAULT_NOTION_BASE_URL.to_string()
}

fn default_notion_version() -> String {
    NOTION_VERSION.to_string()
}

fn default_completion_base_url() -> String {
    DEFAULT_COMPLETION_BASE_URL.to_string()
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_temperature() -> f32 {
    1.0
}

/// `[service]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub mode: TranslateMode,
    /// Directory of frontend assets to serve as a router fallback.
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            mode: TranslateMode::default(),
            static_dir: None,
        }
    }
}

/// `[notion]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct NotionSettings {
    #[serde(default = "default_notion_base_url")]
    pub base_url: String,
    #[serde(default = "default_notion_version")]
    pub version: String,
    pub api_token: String,
}

/// `[completion]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionSettings {
    #[serde(default = "default_completion_base_url")]
    pub base_url: String,
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

/// Resolved settings — validated and ready to construct the clients.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub service: ServiceSettings,
    pub notion: NotionSettings,
    pub completion: CompletionSettings,
}

impl Settings {
    /// Loads and validates settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::MissingConfiguration(format!("read {}: {}", path.display(), e))
        })?;
        Self::parse(&raw)
    }

    /// Parses and validates settings from TOML text.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let settings: Settings = toml::from_str(raw)
            .map_err(|e| AppError::InvalidConfiguration(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), AppError> {
        for (name, value) in [
            ("notion.base_url", &self.notion.base_url),
            ("completion.base_url", &self.completion.base_url),
        ] {
            Url::parse(value).map_err(|e| {
                AppError::InvalidConfiguration(format!("{} is not a valid URL: {}", name, e))
            })?;
        }
        if self.notion.api_token.trim().is_empty() {
            return Err(AppError::MissingConfiguration(
                "notion.api_token".to_string(),
            ));
        }
        if self.completion.api_key.trim().is_empty() {
            return Err(AppError::MissingConfiguration(
                "completion.api_key".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MINIMAL: &str = r#"
        [notion]
        api_token = "secret_token"

        [completion]
        api_key = "sk-key"
    "#;

    #[test]
    fn minimal_config_fills_defaults() {
        let settings = Settings::parse(MINIMAL).unwrap();
        assert_eq!(settings.service.host, "0.0.0.0");
        assert_eq!(settings.service.port, 8080);
        assert_eq!(settings.service.mode, TranslateMode::Deferred);
        assert!(settings.service.static_dir.is_none());
        assert_eq!(settings.notion.base_url, "https://api.notion.com/v1");
        assert_eq!(settings.notion.version, "2022-06-28");
        assert_eq!(settings.completion.model, "gpt-3.5-turbo");
        assert_eq!(settings.completion.temperature, 1.0);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let settings = Settings::parse(
            r#"
            [service]
            host = "127.0.0.1"
            port = 9999
            mode = "inline"
            static_dir = "frontend"

            [notion]
            base_url = "https://proxy.example/v1"
            api_token = "secret_token"

            [completion]
            api_key = "sk-key"
            model = "gpt-4"
            temperature = 0.2
            "#,
        )
        .unwrap();
        assert_eq!(settings.service.mode, TranslateMode::Inline);
        assert_eq!(settings.service.port, 9999);
        assert_eq!(settings.notion.base_url, "https://proxy.example/v1");
        assert_eq!(settings.completion.model, "gpt-4");
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let result = Settings::parse(
            r#"
            [service]
            mode = "parallel"

            [notion]
            api_token = "secret_token"

            [completion]
            api_key = "sk-key"
            "#,
        );
        assert!(matches!(result, Err(AppError::InvalidConfiguration(_))));
    }

    #[test]
    fn empty_tokens_are_rejected() {
        let result = Settings::parse(
            r#"
            [notion]
            api_token = "  "

            [completion]
            api_key = "sk-key"
            "#,
        );
        assert!(matches!(result, Err(AppError::MissingConfiguration(_))));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = Settings::parse(
            r#"
            [notion]
            base_url = "not a url"
            api_token = "secret_token"

            [completion]
            api_key = "sk-key"
            "#,
        );
        assert!(matches!(result, Err(AppError::InvalidConfiguration(_))));
    }
}
