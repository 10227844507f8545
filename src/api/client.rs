// src/api/client.rs
//! HTTP client wrapper for the Notion API.
//!
//! A thin wrapper around reqwest that handles authentication headers
//! and basic request/response operations, plus the `ContentStore`
//! implementation built on it.

use super::parser;
use super::responses::{ChildrenResponse, FetchedPage};
use crate::constants::{APPEND_BATCH_MAX, NOTION_API_PAGE_SIZE};
use crate::error::AppError;
use crate::model::{Block, PageInfo};
use crate::types::{ApiKey, PageId};
use reqwest::{header, Client, Response};
use serde::Serialize;
use serde_json::{json, Value};

/// A thin wrapper around reqwest Client for Notion API requests.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
    base_url: String,
}

impl NotionHttpClient {
    /// Creates a new HTTP client with Notion API authentication.
    pub fn new(token: &ApiKey, base_url: &str, version: &str) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(token, version)?)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates the default headers for Notion API requests.
    fn create_headers(token: &ApiKey, version: &str) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", token.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
            })?,
        );

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_str(version).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid Notion version: {}", e))
            })?,
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    /// Makes a GET request to the specified endpoint.
    pub async fn get(&self, endpoint: &str) -> Result<Response, AppError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        log::debug!("GET {}", url);
        Ok(self.client.get(url).send().await?)
    }

    /// Makes a POST request with JSON body to the specified endpoint.
    pub async fn post<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<Response, AppError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        log::debug!("POST {}", url);
        Ok(self.client.post(url).json(body).send().await?)
    }

    /// Makes a PATCH request with JSON body to the specified endpoint.
    pub async fn patch<T: Serialize>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<Response, AppError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        log::debug!("PATCH {}", url);
        Ok(self.client.patch(url).json(body).send().await?)
    }

    /// Fetches the raw page-info object.
    async fn fetch_page_info(&self, id: &PageId) -> Result<Value, AppError> {
        let response = self.get(&format!("pages/{}", id)).await?;
        parser::parse_response(extract_response_text(response).await?)
    }

    /// Drains the paginated children list into one merged response.
    async fn fetch_children(&self, id: &PageId) -> Result<ChildrenResponse, AppError> {
        let mut merged = self.fetch_children_page(id, None).await?;
        while merged.has_more {
            let Some(cursor) = merged.next_cursor.clone() else {
                break;
            };
            log::debug!("more children for {}, cursor {}", id, cursor);
            let next = self.fetch_children_page(id, Some(&cursor)).await?;
            merged = ChildrenResponse::merge(merged, next);
        }
        Ok(merged)
    }

    async fn fetch_children_page(
        &self,
        id: &PageId,
        cursor: Option<&str>,
    ) -> Result<ChildrenResponse, AppError> {
        let mut endpoint = format!("blocks/{}/children?page_size={}", id, NOTION_API_PAGE_SIZE);
        if let Some(cursor) = cursor {
            endpoint.push_str(&format!("&start_cursor={}", cursor));
        }
        let response = self.get(&endpoint).await?;
        parser::parse_response(extract_response_text(response).await?)
    }
}

#[async_trait::async_trait]
impl super::ContentStore for NotionHttpClient {
    async fn fetch_page(&self, id: &PageId) -> Result<FetchedPage, AppError> {
        log::info!("fetch page {}", id);
        let page_info = self.fetch_page_info(id).await?;
        let page_content = self.fetch_children(id).await?;
        log::info!(
            "fetch page {} done, {} child blocks",
            id,
            page_content.results.len()
        );
        Ok(FetchedPage {
            page_info,
            page_content,
        })
    }

    async fn create_page(&self, parent: &PageId, info: &PageInfo) -> Result<PageId, AppError> {
        let title = info.title_runs().ok_or_else(|| {
            AppError::Validation("page has no title property to carry over".to_string())
        })?;

        let mut body = json!({
            "parent": {"type": "page_id", "page_id": parent.as_str()},
            "properties": {"title": {"title": title}},
        });
        if let Some(icon) = &info.icon {
            body["icon"] = icon.clone();
        }
        if let Some(cover) = &info.cover {
            body["cover"] = cover.clone();
        }

        log::info!("create page under {}", parent);
        let response = self.post("pages", &body).await?;
        let created: Value = parser::parse_response(extract_response_text(response).await?)?;

        let id = created
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::MalformedResponse("created page without an id".to_string()))?;
        Ok(PageId::parse(id)?)
    }

    async fn append_children(&self, parent: &PageId, blocks: &[Block]) -> Result<(), AppError> {
        debug_assert!(blocks.len() <= APPEND_BATCH_MAX);
        let body = json!({ "children": blocks });
        let response = self
            .patch(&format!("blocks/{}/children", parent), &body)
            .await?;
        // Body content is irrelevant on success; only surface failures.
        let _: Value = parser::parse_response(extract_response_text(response).await?)?;
        Ok(())
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
