// src/api/parser.rs
//! Response parsing and the page converter.
//!
//! Parsing maps raw HTTP bodies to typed values or to the typed error
//! vocabulary; the converter turns a fetched page+children payload into
//! the in-memory tree the pipeline mutates.

use super::client::ApiResponse;
use super::responses::{FetchedPage, NotionErrorBody};
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, NotionErrorCode};
use crate::model::{Block, BlockPayload, Page, PageInfo};
use reqwest::StatusCode;
use serde_json::Value;

/// Parse a successful response body, or map an error body to the typed
/// error vocabulary.
pub fn parse_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        serde_json::from_str(&result.data).map_err(|e| {
            log::error!("failed to parse response from {}: {}", result.url, e);
            AppError::MalformedResponse(format!("{} (body: {})", e, preview(&result.data)))
        })
    } else {
        Err(error_from_body(result.status, &result.data, &result.url))
    }
}

/// Map a non-2xx response to `AppError::NotionService`.
///
/// Falls back to the HTTP status when the error body is unparseable.
pub fn error_from_body(status: StatusCode, body: &str, url: &str) -> AppError {
    match serde_json::from_str::<NotionErrorBody>(body) {
        Ok(error) => AppError::NotionService {
            code: NotionErrorCode::from_api_response(&error.code),
            message: error.message,
            status,
        },
        Err(_) => AppError::NotionService {
            code: NotionErrorCode::from_http_status(status.as_u16()),
            message: format!("HTTP {} from {}: {}", status, url, preview(body)),
            status,
        },
    }
}

fn preview(body: &str) -> String {
    if body.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let cut: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", cut)
    } else {
        body.to_string()
    }
}

/// Converts a raw page+children payload into the typed page tree.
///
/// Unsupported block kinds are silently dropped; image blocks backed by
/// Notion-hosted files are rewritten to external references so the tree
/// can be re-uploaded.
pub fn convert_fetched_page(fetched: FetchedPage) -> Result<Page, AppError> {
    let info: PageInfo = serde_json::from_value(fetched.page_info)
        .map_err(|e| AppError::MalformedResponse(format!("page info: {}", e)))?;

    let mut blocks = Vec::with_capacity(fetched.page_content.results.len());
    for raw in fetched.page_content.results {
        let kind = match raw.get("type").and_then(Value::as_str) {
            Some(kind) => kind.to_string(),
            None => {
                return Err(AppError::MalformedResponse(
                    "child block without a type field".to_string(),
                ))
            }
        };
        if !Block::is_supported(&kind) {
            log::debug!("dropping unsupported block type: {}", kind);
            continue;
        }

        let mut block: Block = serde_json::from_value(raw)
            .map_err(|e| AppError::MalformedResponse(format!("{} block: {}", kind, e)))?;
        if let BlockPayload::Image { image } = &mut block.payload {
            image.externalize();
        }
        blocks.push(block);
    }

    log::info!("converted page with {} supported blocks", blocks.len());
    Ok(Page { info, blocks })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::responses::ChildrenResponse;
    use crate::model::FileKind;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn fetched(results: Vec<Value>) -> FetchedPage {
        FetchedPage {
            page_info: json!({
                "id": "59833787-2cf9-4fdf-8782-e53db20768a5",
                "properties": {
                    "title": {
                        "type": "title",
                        "title": [{"type": "text", "text": {"content": "T"}, "plain_text": "T"}]
                    }
                }
            }),
            page_content: ChildrenResponse {
                object: "list".to_string(),
                results,
                next_cursor: None,
                has_more: false,
            },
        }
    }

    #[test]
    fn unsupported_block_is_silently_dropped() {
        let page = convert_fetched_page(fetched(vec![
            json!({"type": "paragraph", "paragraph": {"rich_text": []}}),
            json!({"type": "code", "code": {"rich_text": [], "language": "rust"}}),
            json!({"type": "child_page", "child_page": {"title": "sub"}}),
            json!({"type": "divider", "divider": {}}),
        ]))
        .unwrap();

        let kinds: Vec<&str> = page.blocks.iter().map(Block::block_type).collect();
        assert_eq!(kinds, vec!["paragraph", "divider"]);
    }

    #[test]
    fn internal_image_is_externalized() {
        let page = convert_fetched_page(fetched(vec![json!({
            "type": "image",
            "image": {
                "type": "file",
                "file": {
                    "url": "https://prod-files.notion.example/img.png",
                    "expiry_time": "2023-06-01T00:00:00.000Z"
                }
            }
        })]))
        .unwrap();

        match &page.blocks[0].payload {
            BlockPayload::Image { image } => {
                assert_eq!(image.kind, FileKind::External);
                assert!(image.file.is_none());
                assert_eq!(image.url(), Some("https://prod-files.notion.example/img.png"));
            }
            other => panic!("expected image payload, got {:?}", other),
        }
    }

    #[test]
    fn external_image_is_untouched() {
        let page = convert_fetched_page(fetched(vec![json!({
            "type": "image",
            "image": {"type": "external", "external": {"url": "https://example.com/i.png"}}
        })]))
        .unwrap();

        match &page.blocks[0].payload {
            BlockPayload::Image { image } => {
                assert_eq!(image.kind, FileKind::External);
                assert_eq!(image.url(), Some("https://example.com/i.png"));
            }
            other => panic!("expected image payload, got {:?}", other),
        }
    }

    #[test]
    fn block_without_type_field_is_an_error() {
        let result = convert_fetched_page(fetched(vec![json!({"paragraph": {}})]));
        assert!(matches!(result, Err(AppError::MalformedResponse(_))));
    }

    #[test]
    fn error_body_maps_to_typed_code() {
        let body = r#"{
            "object": "error",
            "status": 404,
            "code": "object_not_found",
            "message": "Could not find block."
        }"#;
        let error = error_from_body(StatusCode::NOT_FOUND, body, "https://api.notion.example");
        match error {
            AppError::NotionService { code, message, status } => {
                assert_eq!(code, NotionErrorCode::ObjectNotFound);
                assert_eq!(message, "Could not find block.");
                assert_eq!(status, StatusCode::NOT_FOUND);
            }
            other => panic!("expected NotionService, got {:?}", other),
        }
    }

    #[test]
    fn unparseable_error_body_falls_back_to_status() {
        let error = error_from_body(StatusCode::BAD_GATEWAY, "<html>boom</html>", "u");
        match error {
            AppError::NotionService { code, .. } => {
                assert_eq!(code, NotionErrorCode::HttpStatus(502));
            }
            other => panic!("expected NotionService, got {:?}", other),
        }
    }
}
