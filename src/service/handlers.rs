// src/service/handlers.rs
//! The translate endpoint.
//!
//! Failures never leak detail to the caller: the reply is a generic
//! 400 envelope and the specifics go to the log.

use crate::config::TranslateMode;
use crate::pipeline::PageTranslator;
use crate::types::{PageId, TargetLanguage};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared per-process state behind the router.
pub struct AppState {
    pub translator: PageTranslator,
    pub mode: TranslateMode,
}

/// Reply envelope: `{code, message}` or `{code, data: {new_page}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiReply {
    pub code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ReplyData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyData {
    pub new_page: String,
}

impl ApiReply {
    /// Fire-and-forget acknowledgement.
    pub fn accepted() -> Self {
        Self {
            code: 200,
            message: Some("OK".to_string()),
            data: None,
        }
    }

    /// Inline success carrying the new page id.
    pub fn created(new_page: &PageId) -> Self {
        Self {
            code: 200,
            message: None,
            data: Some(ReplyData {
                new_page: new_page.to_string(),
            }),
        }
    }

    /// Generic failure, detail stays in the log.
    pub fn failure() -> Self {
        Self {
            code: 400,
            message: Some("translation failed".to_string()),
            data: None,
        }
    }
}

/// `GET /v1/translate/:pageuuid/:language`
pub async fn translate_page(
    State(state): State<Arc<AppState>>,
    Path((pageuuid, language)): Path<(String, String)>,
) -> (StatusCode, Json<ApiReply>) {
    log::debug!(
        "request <translate page> pageuuid: {}, target language: {}",
        pageuuid,
        language
    );

    let (page_id, language) = match (PageId::parse(&pageuuid), TargetLanguage::new(language)) {
        (Ok(id), Ok(lang)) => (id, lang),
        (id, lang) => {
            if let Err(e) = id {
                log::warn!("rejected request: {}", e);
            }
            if let Err(e) = lang {
                log::warn!("rejected request: {}", e);
            }
            return (StatusCode::BAD_REQUEST, Json(ApiReply::failure()));
        }
    };

    match state.mode {
        TranslateMode::Deferred => {
            let translator = state.translator.clone();
            tokio::spawn(async move {
                if let Err(e) = translator.translate_incremental(&page_id, &language).await {
                    log::error!("translate page {} failed: {}", page_id, e);
                }
            });
            (StatusCode::OK, Json(ApiReply::accepted()))
        }
        TranslateMode::Inline => {
            match state.translator.translate_buffered(&page_id, &language).await {
                Ok(new_page) => (StatusCode::OK, Json(ApiReply::created(&new_page))),
                Err(e) => {
                    log::error!("translate page {} failed: {}", page_id, e);
                    (StatusCode::BAD_REQUEST, Json(ApiReply::failure()))
                }
            }
        }
    }
}
