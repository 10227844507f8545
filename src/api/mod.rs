// src/api/mod.rs
//! Notion API interaction — fetching page content and writing the
//! translated copy back.
//!
//! The module separates I/O (client), wire envelopes (responses), and
//! parsing/conversion (parser). Business logic depends on the
//! `ContentStore` trait, never on HTTP details.

pub mod client;
pub mod parser;
pub mod responses;

use crate::error::AppError;
use crate::model::{Block, PageInfo};
use crate::types::PageId;
use responses::FetchedPage;

/// The ability to read a page tree from, and write one back to, the
/// remote content store.
#[async_trait::async_trait]
pub trait ContentStore: Send + Sync {
    /// Fetch page info plus the fully drained, merged children list.
    async fn fetch_page(&self, id: &PageId) -> Result<FetchedPage, AppError>;

    /// Create a new page under `parent`, carrying over title, icon and
    /// cover from `info`. Returns the new page's id.
    async fn create_page(&self, parent: &PageId, info: &PageInfo) -> Result<PageId, AppError>;

    /// Append blocks as children of `parent`. Callers keep each call at
    /// or below `APPEND_BATCH_MAX` blocks.
    async fn append_children(&self, parent: &PageId, blocks: &[Block]) -> Result<(), AppError>;
}

// Re-export the public interface
pub use client::NotionHttpClient;
pub use parser::convert_fetched_page;
pub use responses::ChildrenResponse;
