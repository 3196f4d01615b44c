//! Common types used throughout holocron
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for treating empty strings as absent
///
/// The catalog occasionally reports an absent pagination link as `""`
/// instead of `null`; both mean there is nothing to follow.
pub trait OptionStringExt {
    /// Returns the string slice unless it is missing or empty
    fn none_if_empty(&self) -> Option<&str>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(&self) -> Option<&str> {
        self.as_deref().filter(|s| !s.is_empty())
    }
}
