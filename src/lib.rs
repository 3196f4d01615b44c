// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::match_same_arms)]

//! # Holocron
//!
//! A typed async client for the Star Wars catalog API with lazy,
//! page-at-a-time iteration over its collections.
//!
//! ## Features
//!
//! - **Typed Models**: People and films decode into plain Rust structs
//! - **Lazy Pagination**: `QuerySet` fetches a page only when iteration
//!   needs it, holding at most one page in memory
//! - **Explicit Lifecycle**: Cursor state is observable and failures are
//!   sticky, so loops always terminate
//! - **Resilient Transport**: Transient failures retry with exponential
//!   backoff before anything is reported
//! - **Stream Adapter**: Any queryset converts into a `futures::Stream`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use holocron::{ApiClient, Model, ResourceKind, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = ApiClient::new();
//!
//!     // Fetch one record by id
//!     let film = Model::get(&client, ResourceKind::Films, 1).await?;
//!     println!("{film}");
//!
//!     // Walk a whole collection lazily
//!     let mut people = Model::all(&client, ResourceKind::People).await?;
//!     println!("{people}");
//!     while let Some(person) = people.try_next().await? {
//!         println!("{person}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                      Model Layer                       │
//! │   Person / Film records, dispatched by ResourceKind    │
//! │   Model::get(kind, id)         Model::all(kind)        │
//! └───────────────────────────┬────────────────────────────┘
//!                             │
//! ┌───────────────────────────┴────────────────────────────┐
//! │                        QuerySet                        │
//! │   one buffered page, next fetched on demand            │
//! │   Ready → Pending → Exhausted / Failed                 │
//! └───────────────────────────┬────────────────────────────┘
//!                             │
//! ┌───────────────────────────┴────────────────────────────┐
//! │                        ApiClient                       │
//! │   retrying GET transport, raw status for next links    │
//! └────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Resource kinds and endpoint dispatch
pub mod resource;

/// Typed resource models
pub mod models;

/// Lazy paginated iteration
pub mod queryset;

/// HTTP client with retry and backoff
pub mod http;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use http::{ApiClient, ApiClientConfig, HttpResponse, DEFAULT_BASE_URL};
pub use models::{Film, Model, Person};
pub use queryset::{Page, QuerySet, QuerySetState};
pub use resource::ResourceKind;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
