// src/types/rich_text.rs
//! Rich text runs and the accessor operations the pipeline performs on them.
//!
//! The wire shape is kept byte-compatible with the Notion API so that
//! fetched runs can be written straight back through the page-mutation
//! endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The kind of rich text content — a typed vocabulary replacing
/// stringly-typed dispatch.
///
/// The struct-variant field names match the wire keys, so the enum
/// serializes to `{"type": "text", "text": {...}}` and friends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichTextContent {
    Text { text: TextContent },
    Mention { mention: Value },
    Equation { equation: EquationContent },
}

/// Rich text item with formatting annotations.
///
/// `plain_text` provides the fallback rendering for any content variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextItem {
    #[serde(flatten)]
    pub content: RichTextContent,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(default)]
    pub plain_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl RichTextItem {
    /// Create a plain text item — the most common rich text variant.
    pub fn plain(text: impl Into<String>) -> Self {
        let text: String = text.into();
        Self {
            content: RichTextContent::Text {
                text: TextContent {
                    content: text.clone(),
                    link: None,
                },
            },
            annotations: Annotations::default(),
            plain_text: text,
            href: None,
        }
    }

    /// The human-readable text of this run.
    ///
    /// Prefers the API-provided `plain_text`; falls back to the text
    /// content for locally constructed runs.
    pub fn effective_text(&self) -> &str {
        if !self.plain_text.is_empty() {
            return &self.plain_text;
        }
        match &self.content {
            RichTextContent::Text { text } => &text.content,
            RichTextContent::Equation { equation } => &equation.expression,
            RichTextContent::Mention { .. } => "",
        }
    }
}

/// Text content of a `text`-typed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

/// Inline equation content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationContent {
    pub expression: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Annotations {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub strikethrough: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub code: bool,
    #[serde(default)]
    pub color: Color,
}

/// Type-safe color enum instead of strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    #[default]
    Default,
    Gray,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    GrayBackground,
    BrownBackground,
    RedBackground,
    OrangeBackground,
    YellowBackground,
    GreenBackground,
    BlueBackground,
    PurpleBackground,
    PinkBackground,
}

/// Concatenates the plain text of every run in order.
pub fn plain_text_of(runs: &[RichTextItem]) -> String {
    runs.iter().map(RichTextItem::effective_text).collect()
}

/// Collapses a run list to exactly one element carrying `new_text`.
///
/// The first run's annotations are retained; any additional runs and
/// their distinct formatting are discarded, and link/href are cleared
/// since they pointed at pre-translation anchors. An empty list gains
/// one default-formatted run.
pub fn replace_runs(runs: &mut Vec<RichTextItem>, new_text: &str) {
    let annotations = runs
        .first()
        .map(|run| run.annotations)
        .unwrap_or_default();
    runs.clear();
    runs.push(RichTextItem {
        content: RichTextContent::Text {
            text: TextContent {
                content: new_text.to_string(),
                link: None,
            },
        },
        annotations,
        plain_text: new_text.to_string(),
        href: None,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn styled(text: &str, bold: bool) -> RichTextItem {
        let mut run = RichTextItem::plain(text);
        run.annotations.bold = bold;
        run
    }

    #[test]
    fn plain_text_concatenates_in_order() {
        let runs = vec![styled("Hello, ", true), styled("world", false)];
        assert_eq!(plain_text_of(&runs), "Hello, world");
    }

    #[test]
    fn replace_collapses_to_exactly_one_run() {
        let mut runs = vec![styled("Hello, ", true), styled("world", false)];
        replace_runs(&mut runs, "你好，世界");

        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].plain_text, "你好，世界");
        match &runs[0].content {
            RichTextContent::Text { text } => {
                assert_eq!(text.content, "你好，世界");
                assert!(text.link.is_none());
            }
            other => panic!("expected text content, got {:?}", other),
        }
        // First run's formatting survives, the second run's is gone.
        assert!(runs[0].annotations.bold);
        assert!(runs[0].href.is_none());
    }

    #[test]
    fn replace_on_empty_list_creates_a_default_run() {
        let mut runs = Vec::new();
        replace_runs(&mut runs, "nouveau");
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].effective_text(), "nouveau");
        assert_eq!(runs[0].annotations, Annotations::default());
    }

    #[test]
    fn replace_clears_links() {
        let mut run = RichTextItem::plain("docs");
        if let RichTextContent::Text { text } = &mut run.content {
            text.link = Some(Link {
                url: "https://example.com".to_string(),
            });
        }
        run.href = Some("https://example.com".to_string());

        let mut runs = vec![run];
        replace_runs(&mut runs, "documentation");
        assert!(runs[0].href.is_none());
        match &runs[0].content {
            RichTextContent::Text { text } => assert!(text.link.is_none()),
            other => panic!("expected text content, got {:?}", other),
        }
    }

    #[test]
    fn run_wire_format_round_trips() {
        let json = r#"{
            "type": "text",
            "text": {"content": "Hello", "link": {"url": "https://example.com"}},
            "annotations": {
                "bold": true, "italic": false, "strikethrough": false,
                "underline": false, "code": false, "color": "red_background"
            },
            "plain_text": "Hello",
            "href": "https://example.com"
        }"#;

        let run: RichTextItem = serde_json::from_str(json).unwrap();
        assert_eq!(run.effective_text(), "Hello");
        assert_eq!(run.annotations.color, Color::RedBackground);

        let back = serde_json::to_value(&run).unwrap();
        assert_eq!(back["type"], "text");
        assert_eq!(back["text"]["content"], "Hello");
        assert_eq!(back["annotations"]["color"], "red_background");
    }
}
