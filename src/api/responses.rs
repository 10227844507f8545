// src/api/responses.rs
//! Wire envelopes for the page-content and page-mutation endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

fn list_object() -> String {
    "list".to_string()
}

/// One paginated children-list response.
///
/// `results` stays raw here: filtering and typing happen in the page
/// converter, after pagination has been drained and merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildrenResponse {
    #[serde(default = "list_object")]
    pub object: String,
    #[serde(default)]
    pub results: Vec<Value>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

impl ChildrenResponse {
    /// Combines two paginated responses into one logical result set.
    ///
    /// Result order is preserved — `first`'s results, then `second`'s.
    /// Pagination state comes from the later response, so merging a
    /// whole cursor chain ends with `has_more: false`.
    pub fn merge(first: ChildrenResponse, second: ChildrenResponse) -> ChildrenResponse {
        let mut results = first.results;
        results.extend(second.results);
        ChildrenResponse {
            object: first.object,
            results,
            next_cursor: second.next_cursor,
            has_more: second.has_more,
        }
    }
}

/// The raw page+children payload handed to the page converter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchedPage {
    pub page_info: Value,
    pub page_content: ChildrenResponse,
}

/// Error body shape returned by the Notion API on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct NotionErrorBody {
    pub code: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn response(texts: &[&str], cursor: Option<&str>) -> ChildrenResponse {
        ChildrenResponse {
            object: "list".to_string(),
            results: texts.iter().map(|t| json!({"type": "paragraph", "paragraph": {"rich_text": [], "marker": t}})).collect(),
            next_cursor: cursor.map(String::from),
            has_more: cursor.is_some(),
        }
    }

    #[test]
    fn merge_preserves_order_and_concatenates() {
        let first = response(&["a", "b"], Some("cursor-1"));
        let second = response(&["c"], None);

        let merged = ChildrenResponse::merge(first, second);

        let markers: Vec<&str> = merged
            .results
            .iter()
            .map(|v| v["paragraph"]["marker"].as_str().unwrap())
            .collect();
        assert_eq!(markers, vec!["a", "b", "c"]);
        assert_eq!(merged.results.len(), 3);
    }

    #[test]
    fn merge_takes_pagination_state_from_later_response() {
        let first = response(&["a"], Some("cursor-1"));
        let second = response(&["b"], None);

        let merged = ChildrenResponse::merge(first, second);

        assert!(!merged.has_more);
        assert!(merged.next_cursor.is_none());
        assert_eq!(merged.object, "list");
    }

    #[test]
    fn children_response_parses_api_shape() {
        let json = r#"{
            "object": "list",
            "results": [{"type": "divider", "divider": {}}],
            "next_cursor": "abc",
            "has_more": true,
            "type": "block",
            "block": {}
        }"#;
        let response: ChildrenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.next_cursor.as_deref(), Some("abc"));
        assert!(response.has_more);
    }
}
