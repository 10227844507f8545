// src/model/mod.rs
//! The typed page and block tree the pipeline operates on.

mod block;
pub mod blocks;

pub use block::{Block, BlockPayload, SUPPORTED_BLOCK_TYPES};
pub use blocks::{
    CalloutPayload, DividerPayload, ExternalFile, FileKind, FileObject, InternalFile, TextPayload,
    ToDoPayload,
};

use crate::types::{plain_text_of, PageId, RichTextItem};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One property of a page.
///
/// Only title run lists are modeled; everything else passes through the
/// flattened catch-all untouched. A title-typed property is the only
/// property kind carrying a `title` array, so its presence identifies
/// the page title regardless of the property's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PageProperty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Vec<RichTextItem>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Page-level metadata fetched from the page-info endpoint.
///
/// Icon and cover are pass-through values: they are carried to the new
/// page verbatim, whatever shape the API gave them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    pub id: PageId,
    #[serde(default)]
    pub properties: IndexMap<String, PageProperty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<Value>,
}

impl PageInfo {
    /// The title runs, wherever the title-typed property sits.
    ///
    /// Plain pages keep it under the `title` key; database rows use the
    /// title column's name (commonly `Name`).
    pub fn title_runs(&self) -> Option<&Vec<RichTextItem>> {
        self.properties.values().find_map(|prop| prop.title.as_ref())
    }

    /// Mutable access to the title runs.
    pub fn title_runs_mut(&mut self) -> Option<&mut Vec<RichTextItem>> {
        self.properties
            .values_mut()
            .find_map(|prop| prop.title.as_mut())
    }

    /// The page title as plain text, or `None` when the page carries no
    /// title-typed property.
    pub fn title_text(&self) -> Option<String> {
        self.title_runs().map(|runs| plain_text_of(runs))
    }
}

/// A converted page: metadata plus the ordered, supported block tree.
///
/// Constructed once per request, mutated in place while iterating
/// blocks, discarded after upload.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub info: PageInfo,
    pub blocks: Vec<Block>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn title_found_under_title_key() {
        let json = r#"{
            "id": "59833787-2cf9-4fdf-8782-e53db20768a5",
            "properties": {
                "title": {
                    "id": "title",
                    "type": "title",
                    "title": [{"type": "text", "text": {"content": "My page"}, "plain_text": "My page"}]
                }
            }
        }"#;
        let info: PageInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.title_text().as_deref(), Some("My page"));
    }

    #[test]
    fn title_found_under_database_column_name() {
        let json = r#"{
            "id": "59833787-2cf9-4fdf-8782-e53db20768a5",
            "properties": {
                "Tags": {"id": "a1", "type": "multi_select", "multi_select": []},
                "Name": {
                    "id": "b2",
                    "type": "title",
                    "title": [{"type": "text", "text": {"content": "Row title"}, "plain_text": "Row title"}]
                }
            }
        }"#;
        let info: PageInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.title_text().as_deref(), Some("Row title"));
    }

    #[test]
    fn page_without_title_property_yields_none() {
        let json = r#"{
            "id": "59833787-2cf9-4fdf-8782-e53db20768a5",
            "properties": {
                "Status": {"id": "c3", "type": "select", "select": null}
            }
        }"#;
        let info: PageInfo = serde_json::from_str(json).unwrap();
        assert!(info.title_text().is_none());
    }

    #[test]
    fn icon_and_cover_pass_through() {
        let json = r#"{
            "id": "59833787-2cf9-4fdf-8782-e53db20768a5",
            "properties": {},
            "icon": {"type": "emoji", "emoji": "🌍"},
            "cover": {"type": "external", "external": {"url": "https://example.com/c.png"}}
        }"#;
        let info: PageInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.icon.as_ref().unwrap()["emoji"], "🌍");
        assert_eq!(
            info.cover.as_ref().unwrap()["external"]["url"],
            "https://example.com/c.png"
        );
    }
}
