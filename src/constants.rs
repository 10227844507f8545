// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role. Reading these constants should tell you the story of
//! how the system talks to its remote APIs: which protocol revision it
//! speaks, how much it fetches per round-trip, how much it writes back.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// The Notion API revision this client speaks, sent as the
/// `Notion-Version` header on every request.
pub const NOTION_VERSION: &str = "2022-06-28";

/// Default base URL of the Notion API, overridable in `[notion]` config.
pub const DEFAULT_NOTION_BASE_URL: &str = "https://api.notion.com/v1";

/// How many objects the Notion API returns per page of results.
///
/// The Notion API maximum is 100. We use the maximum to minimize
/// round-trips while draining the children-list cursor.
pub const NOTION_API_PAGE_SIZE: usize = 100;

/// Maximum number of blocks accepted by a single append-children call.
///
/// The Notion API rejects larger payloads; the upload path slices the
/// translated block list into chunks of at most this size.
pub const APPEND_BATCH_MAX: usize = 100;

// ---------------------------------------------------------------------------
// Completion API boundaries
// ---------------------------------------------------------------------------

/// Default base URL of the chat-completion API, overridable in
/// `[completion]` config for OpenAI-compatible gateways.
pub const DEFAULT_COMPLETION_BASE_URL: &str = "https://api.openai.com/v1";

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing undecodable response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
