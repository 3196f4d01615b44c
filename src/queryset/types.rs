use std::collections::VecDeque;

use serde::Deserialize;

use crate::types::{JsonValue, OptionStringExt};

// ============================================================================
// Page
// ============================================================================

/// One page of list results as returned by the service.
///
/// `count` and `results` are required; a page missing either fails to
/// decode. The pagination links tolerate being absent as well as `null`.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    /// Total number of objects across all pages, as reported by this page.
    pub count: u64,
    /// URL of the next page, `None` on the last page.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, `None` on the first page.
    #[serde(default)]
    pub previous: Option<String>,
    /// Raw objects on this page, consumed front to back.
    pub results: VecDeque<JsonValue>,
}

impl Page {
    /// Returns the next-page URL, treating empty strings as absent.
    pub fn next_url(&self) -> Option<&str> {
        self.next.none_if_empty()
    }

    /// Returns the previous-page URL, treating empty strings as absent.
    pub fn previous_url(&self) -> Option<&str> {
        self.previous.none_if_empty()
    }
}

// ============================================================================
// State
// ============================================================================

/// Where a [`QuerySet`](super::QuerySet) is in its walk across pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuerySetState {
    /// Objects remain in the buffered page.
    Ready,
    /// The buffer is drained; the next page has not been fetched yet.
    Pending,
    /// Every page has been consumed. Terminal.
    Exhausted,
    /// A page fetch or decode failed. Terminal.
    Failed,
}

impl QuerySetState {
    /// Returns `true` for the terminal states.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Exhausted | Self::Failed)
    }
}
