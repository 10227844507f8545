// src/model/blocks.rs
//! Per-kind block payloads, wire-compatible with the Notion API.
//!
//! Payload fields we do not model round-trip through a flattened
//! catch-all map so a fetched block can be appended back unchanged.

use crate::types::{Color, RichTextItem};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload shared by every text-bearing block kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TextPayload {
    #[serde(default)]
    pub rich_text: Vec<RichTextItem>,
    #[serde(default)]
    pub color: Color,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TextPayload {
    pub fn from_runs(rich_text: Vec<RichTextItem>) -> Self {
        Self {
            rich_text,
            ..Self::default()
        }
    }
}

/// To-do payload: text plus a checked state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ToDoPayload {
    #[serde(default)]
    pub rich_text: Vec<RichTextItem>,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub color: Color,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Callout payload: text plus an icon passed through untyped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CalloutPayload {
    #[serde(default)]
    pub rich_text: Vec<RichTextItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Value>,
    #[serde(default)]
    pub color: Color,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Divider payload carries no data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DividerPayload {}

/// Hosting variant of a file-backed block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    External,
    File,
}

/// An externally hosted file reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalFile {
    pub url: String,
}

/// A Notion-hosted file reference with its expiring URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalFile {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_time: Option<String>,
}

/// File object used by image and video blocks.
///
/// Exactly one of `external`/`file` is populated, selected by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileObject {
    #[serde(rename = "type")]
    pub kind: FileKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external: Option<ExternalFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<InternalFile>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub caption: Vec<RichTextItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FileObject {
    pub fn external(url: impl Into<String>) -> Self {
        Self {
            kind: FileKind::External,
            external: Some(ExternalFile { url: url.into() }),
            file: None,
            caption: Vec::new(),
            extra: Map::new(),
        }
    }

    /// The URL of whichever hosting variant is populated.
    pub fn url(&self) -> Option<&str> {
        match self.kind {
            FileKind::External => self.external.as_ref().map(|f| f.url.as_str()),
            FileKind::File => self.file.as_ref().map(|f| f.url.as_str()),
        }
    }

    /// Rewrites an internal-file reference as an external one.
    ///
    /// The Notion-hosted URL is reused as the external URL and the
    /// internal-file payload is dropped, so the object can be written
    /// through the page-mutation API (which rejects `file`-typed
    /// uploads it does not own). External references are untouched.
    pub fn externalize(&mut self) {
        if self.kind != FileKind::File {
            return;
        }
        if let Some(file) = self.file.take() {
            self.kind = FileKind::External;
            self.external = Some(ExternalFile { url: file.url });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn externalize_moves_internal_url() {
        let mut object = FileObject {
            kind: FileKind::File,
            external: None,
            file: Some(InternalFile {
                url: "https://s3.notion.example/img.png".to_string(),
                expiry_time: Some("2023-01-01T00:00:00.000Z".to_string()),
            }),
            caption: Vec::new(),
            extra: Map::new(),
        };

        object.externalize();

        assert_eq!(object.kind, FileKind::External);
        assert!(object.file.is_none());
        assert_eq!(object.url(), Some("https://s3.notion.example/img.png"));
    }

    #[test]
    fn externalize_leaves_external_untouched() {
        let mut object = FileObject::external("https://example.com/pic.jpg");
        let before = object.clone();
        object.externalize();
        assert_eq!(object, before);
    }

    #[test]
    fn externalized_object_serializes_without_file_payload() {
        let mut object = FileObject {
            kind: FileKind::File,
            external: None,
            file: Some(InternalFile {
                url: "https://s3.notion.example/img.png".to_string(),
                expiry_time: None,
            }),
            caption: Vec::new(),
            extra: Map::new(),
        };
        object.externalize();

        let json = serde_json::to_value(&object).unwrap();
        assert_eq!(json["type"], "external");
        assert_eq!(json["external"]["url"], "https://s3.notion.example/img.png");
        assert!(json.get("file").is_none());
    }
}
