// src/model/block.rs
use super::blocks::*;
use crate::types::{plain_text_of, replace_runs, RichTextItem};
use serde::{Deserialize, Serialize};

/// The supported subset of Notion block kinds, by wire type tag.
///
/// Anything outside this list is silently dropped during page
/// conversion — the translated copy only carries what it can faithfully
/// re-upload.
pub const SUPPORTED_BLOCK_TYPES: &[&str] = &[
    "paragraph",
    "heading_1",
    "heading_2",
    "heading_3",
    "bulleted_list_item",
    "numbered_list_item",
    "to_do",
    "toggle",
    "callout",
    "divider",
    "video",
    "quote",
    "image",
];

/// Type-tagged payload union over the supported block kinds.
///
/// Struct-variant field names match the wire keys, so a variant
/// serializes to `{"type": "paragraph", "paragraph": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BlockPayload {
    #[serde(rename = "paragraph")]
    Paragraph { paragraph: TextPayload },
    #[serde(rename = "heading_1")]
    Heading1 { heading_1: TextPayload },
    #[serde(rename = "heading_2")]
    Heading2 { heading_2: TextPayload },
    #[serde(rename = "heading_3")]
    Heading3 { heading_3: TextPayload },
    #[serde(rename = "bulleted_list_item")]
    BulletedListItem { bulleted_list_item: TextPayload },
    #[serde(rename = "numbered_list_item")]
    NumberedListItem { numbered_list_item: TextPayload },
    #[serde(rename = "to_do")]
    ToDo { to_do: ToDoPayload },
    #[serde(rename = "toggle")]
    Toggle { toggle: TextPayload },
    #[serde(rename = "callout")]
    Callout { callout: CalloutPayload },
    #[serde(rename = "divider")]
    Divider { divider: DividerPayload },
    #[serde(rename = "video")]
    Video { video: FileObject },
    #[serde(rename = "quote")]
    Quote { quote: TextPayload },
    #[serde(rename = "image")]
    Image { image: FileObject },
}

/// A Notion content block.
///
/// `id` and `has_children` are fetch-side metadata and are never
/// serialized — the page-mutation API expects bare `type` + payload
/// objects on append.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default, skip_serializing)]
    pub id: Option<String>,
    #[serde(default, skip_serializing)]
    pub has_children: bool,
    #[serde(flatten)]
    pub payload: BlockPayload,
}

impl Block {
    pub fn new(payload: BlockPayload) -> Self {
        Self {
            id: None,
            has_children: false,
            payload,
        }
    }

    /// Whether a wire type tag names a supported block kind.
    pub fn is_supported(block_type: &str) -> bool {
        SUPPORTED_BLOCK_TYPES.contains(&block_type)
    }

    /// Get block type name
    pub fn block_type(&self) -> &'static str {
        match &self.payload {
            BlockPayload::Paragraph { .. } => "paragraph",
            BlockPayload::Heading1 { .. } => "heading_1",
            BlockPayload::Heading2 { .. } => "heading_2",
            BlockPayload::Heading3 { .. } => "heading_3",
            BlockPayload::BulletedListItem { .. } => "bulleted_list_item",
            BlockPayload::NumberedListItem { .. } => "numbered_list_item",
            BlockPayload::ToDo { .. } => "to_do",
            BlockPayload::Toggle { .. } => "toggle",
            BlockPayload::Callout { .. } => "callout",
            BlockPayload::Divider { .. } => "divider",
            BlockPayload::Video { .. } => "video",
            BlockPayload::Quote { .. } => "quote",
            BlockPayload::Image { .. } => "image",
        }
    }

    /// The block's rich text runs, if its kind owns any.
    pub fn rich_text(&self) -> Option<&[RichTextItem]> {
        match &self.payload {
            BlockPayload::Paragraph { paragraph } => Some(&paragraph.rich_text),
            BlockPayload::Heading1 { heading_1 } => Some(&heading_1.rich_text),
            BlockPayload::Heading2 { heading_2 } => Some(&heading_2.rich_text),
            BlockPayload::Heading3 { heading_3 } => Some(&heading_3.rich_text),
            BlockPayload::BulletedListItem { bulleted_list_item } => {
                Some(&bulleted_list_item.rich_text)
            }
            BlockPayload::NumberedListItem { numbered_list_item } => {
                Some(&numbered_list_item.rich_text)
            }
            BlockPayload::ToDo { to_do } => Some(&to_do.rich_text),
            BlockPayload::Toggle { toggle } => Some(&toggle.rich_text),
            BlockPayload::Callout { callout } => Some(&callout.rich_text),
            BlockPayload::Quote { quote } => Some(&quote.rich_text),
            BlockPayload::Divider { .. }
            | BlockPayload::Video { .. }
            | BlockPayload::Image { .. } => None,
        }
    }

    /// Mutable access to the block's rich text runs.
    pub fn rich_text_mut(&mut self) -> Option<&mut Vec<RichTextItem>> {
        match &mut self.payload {
            BlockPayload::Paragraph { paragraph } => Some(&mut paragraph.rich_text),
            BlockPayload::Heading1 { heading_1 } => Some(&mut heading_1.rich_text),
            BlockPayload::Heading2 { heading_2 } => Some(&mut heading_2.rich_text),
            BlockPayload::Heading3 { heading_3 } => Some(&mut heading_3.rich_text),
            BlockPayload::BulletedListItem { bulleted_list_item } => {
                Some(&mut bulleted_list_item.rich_text)
            }
            BlockPayload::NumberedListItem { numbered_list_item } => {
                Some(&mut numbered_list_item.rich_text)
            }
            BlockPayload::ToDo { to_do } => Some(&mut to_do.rich_text),
            BlockPayload::Toggle { toggle } => Some(&mut toggle.rich_text),
            BlockPayload::Callout { callout } => Some(&mut callout.rich_text),
            BlockPayload::Quote { quote } => Some(&mut quote.rich_text),
            BlockPayload::Divider { .. }
            | BlockPayload::Video { .. }
            | BlockPayload::Image { .. } => None,
        }
    }

    /// The block's translatable text, or `None` for run-less kinds.
    pub fn plain_text(&self) -> Option<String> {
        self.rich_text().map(plain_text_of)
    }

    /// Collapse the block's runs to a single run carrying `new_text`.
    ///
    /// No-op for run-less kinds.
    pub fn replace_text(&mut self, new_text: &str) {
        if let Some(runs) = self.rich_text_mut() {
            replace_runs(runs, new_text);
        }
    }
}
