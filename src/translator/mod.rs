// src/translator/mod.rs
//! Translation through a chat-completion API.
//!
//! The prompt is fixed: `Translate to {language}: {text}`. Whatever the
//! model returns as the first choice's message content is the
//! translation — there is no quality layer on top.

use crate::api::client::extract_response_text;
use crate::config::CompletionSettings;
use crate::error::AppError;
use crate::types::{ApiKey, TargetLanguage};
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};

/// The ability to translate a piece of text into a target language.
#[async_trait::async_trait]
pub trait TranslationEngine: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        language: &TargetLanguage,
    ) -> Result<String, AppError>;
}

/// Chat-completion request wire shape (OpenAI-compatible).
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub temperature: f32,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

/// Builds the fixed translation prompt.
pub fn build_prompt(text: &str, language: &TargetLanguage) -> String {
    format!("Translate to {}: {}", language, text)
}

/// `TranslationEngine` backed by a remote chat-completion API.
pub struct CompletionTranslator {
    client: Client,
    base_url: String,
    model: String,
    temperature: f32,
}

impl CompletionTranslator {
    /// Creates a translator with bearer authentication.
    pub fn new(api_key: &ApiKey, settings: &CompletionSettings) -> Result<Self, AppError> {
        let mut headers = header::HeaderMap::new();
        let auth_header = format!("Bearer {}", api_key.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid API key format: {}", e))
            })?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            temperature: settings.temperature,
        })
    }

    /// Posts one single-message completion and returns the first
    /// choice's content.
    async fn chat_completion(&self, content: String) -> Result<String, AppError> {
        log::debug!("chat completion: {}", content);
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            temperature: self.temperature,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content,
            }],
        };

        let url = format!("{}/chat/completions", self.base_url);
        let response = self.client.post(&url).json(&request).send().await?;
        let result = extract_response_text(response).await?;

        if !result.status.is_success() {
            return Err(AppError::Completion(format!(
                "HTTP {} from {}",
                result.status, result.url
            )));
        }

        let completion: ChatCompletionResponse = serde_json::from_str(&result.data)
            .map_err(|e| AppError::Completion(format!("undecodable response: {}", e)))?;
        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Completion("response contained no choices".to_string()))?;

        log::debug!("completion: {}", choice.message.content);
        Ok(choice.message.content)
    }
}

#[async_trait::async_trait]
impl TranslationEngine for CompletionTranslator {
    async fn translate(
        &self,
        text: &str,
        language: &TargetLanguage,
    ) -> Result<String, AppError> {
        self.chat_completion(build_prompt(text, language)).await
    }
}
