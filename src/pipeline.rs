// src/pipeline.rs
//! The orchestrator: fetch → convert → translate → create/append.
//!
//! Both write strategies share a prologue (fetch, convert, translate
//! the title) and differ only in when blocks are written back. The
//! first error aborts the whole request; there are no retries and no
//! partial-result recovery.

use crate::api::{convert_fetched_page, ContentStore};
use crate::constants::APPEND_BATCH_MAX;
use crate::error::AppError;
use crate::model::{Block, Page};
use crate::translator::TranslationEngine;
use crate::types::{replace_runs, PageId, TargetLanguage};
use std::sync::Arc;

/// Drives one page's translation from fetch to upload.
#[derive(Clone)]
pub struct PageTranslator {
    store: Arc<dyn ContentStore>,
    engine: Arc<dyn TranslationEngine>,
}

impl PageTranslator {
    pub fn new(store: Arc<dyn ContentStore>, engine: Arc<dyn TranslationEngine>) -> Self {
        Self { store, engine }
    }

    /// Streaming strategy: create the new page first, then translate
    /// and append one block per call, so partial progress is visible in
    /// the workspace while long pages translate.
    pub async fn translate_incremental(
        &self,
        page_id: &PageId,
        language: &TargetLanguage,
    ) -> Result<PageId, AppError> {
        let mut page = self.prepare(page_id, language).await?;
        let new_page = self.store.create_page(page_id, &page.info).await?;
        log::info!("created page {} under {}", new_page, page_id);

        for block in &mut page.blocks {
            self.translate_block(block, language).await?;
            self.store
                .append_children(&new_page, std::slice::from_ref(block))
                .await?;
        }

        log::info!("translated page {} -> {}", page_id, new_page);
        Ok(new_page)
    }

    /// Buffered strategy: translate every block in place, then create
    /// the page and upload the whole tree in bounded-size batches.
    pub async fn translate_buffered(
        &self,
        page_id: &PageId,
        language: &TargetLanguage,
    ) -> Result<PageId, AppError> {
        let mut page = self.prepare(page_id, language).await?;
        for block in &mut page.blocks {
            self.translate_block(block, language).await?;
        }

        let new_page = self.store.create_page(page_id, &page.info).await?;
        log::info!("created page {} under {}", new_page, page_id);
        for chunk in page.blocks.chunks(APPEND_BATCH_MAX) {
            self.store.append_children(&new_page, chunk).await?;
        }

        log::info!("translated page {} -> {}", page_id, new_page);
        Ok(new_page)
    }

    /// Shared prologue: fetch the tree, convert it, translate the title.
    async fn prepare(
        &self,
        page_id: &PageId,
        language: &TargetLanguage,
    ) -> Result<Page, AppError> {
        log::info!("translate page {} to {}", page_id, language);
        let fetched = self.store.fetch_page(page_id).await?;
        let mut page = convert_fetched_page(fetched)?;

        let title = page
            .info
            .title_text()
            .ok_or_else(|| AppError::Validation("page has no title property".to_string()))?;
        if !title.is_empty() {
            let translated = self.engine.translate(&title, language).await?;
            if let Some(runs) = page.info.title_runs_mut() {
                replace_runs(runs, &translated);
            }
        }

        Ok(page)
    }

    /// Translates one block's text in place. Run-less blocks and blocks
    /// with empty text pass through untouched.
    async fn translate_block(
        &self,
        block: &mut Block,
        language: &TargetLanguage,
    ) -> Result<(), AppError> {
        let Some(text) = block.plain_text() else {
            return Ok(());
        };
        if text.is_empty() {
            return Ok(());
        }
        let translated = self.engine.translate(&text, language).await?;
        block.replace_text(&translated);
        Ok(())
    }
}
