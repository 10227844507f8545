// src/lib.rs
//! notionglot library — translates Notion pages through an LLM
//! completion API and writes the result back as a new Notion page.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `ValidationError`
//! - **Configuration** — `Settings`, `TranslateMode`
//! - **Domain model** — `Page`, `PageInfo`, `Block`, `BlockPayload`
//! - **Domain types** — `PageId`, `ApiKey`, `TargetLanguage`, `RichTextItem`
//! - **API client** — `NotionHttpClient`, `ContentStore`, the page converter
//! - **Translation** — `TranslationEngine`, `CompletionTranslator`
//! - **Orchestration** — `PageTranslator`, the HTTP service

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod service;
pub mod translator;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, Settings, TranslateMode};

// --- Domain Model ---
pub use crate::model::{Block, BlockPayload, Page, PageInfo, SUPPORTED_BLOCK_TYPES};

// --- Domain Types ---
pub use crate::types::{
    plain_text_of, replace_runs, Annotations, ApiKey, Color, PageId, RichTextItem, TargetLanguage,
};

// --- API Client ---
pub use crate::api::{convert_fetched_page, ChildrenResponse, ContentStore, NotionHttpClient};
pub use crate::api::responses::FetchedPage;

// --- Translation ---
pub use crate::translator::{CompletionTranslator, TranslationEngine};

// --- Orchestration ---
pub use crate::pipeline::PageTranslator;
pub use crate::service::AppState;
