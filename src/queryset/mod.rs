//! Lazy iteration over paginated collections.
//!
//! # Overview
//!
//! The queryset module provides:
//! - `QuerySet` - Cursor that walks a resource's list pages on demand
//! - `Page` - One decoded page of raw results
//! - `QuerySetState` - Explicit page-walk lifecycle
//!
//! A [`QuerySet`] buffers exactly one page. Objects are handed out from the
//! front of the buffer and the next page is requested only once the buffer
//! runs dry, so touching the first few objects of a large collection costs
//! a single request.

mod types;

pub use types::{Page, QuerySetState};

use std::fmt;

use futures::stream::{self, Stream};
use tracing::debug;

use crate::error::{Error, Result};
use crate::http::ApiClient;
use crate::models::Model;
use crate::resource::ResourceKind;

// ============================================================================
// QuerySet
// ============================================================================

/// Lazy cursor over every object of one resource kind.
///
/// Created through [`Model::all`] or the per-model `all` constructors;
/// creation fetches the first page so the total [`count`](Self::count) is
/// known immediately. Further pages are fetched strictly on demand.
///
/// Errors are sticky: once a page fetch or page decode fails the cursor is
/// [`Failed`](QuerySetState::Failed) and stays that way. The failing call
/// returns the error and every later call returns `Ok(None)`, so a loop
/// that ignores errors still terminates.
#[derive(Debug)]
pub struct QuerySet {
    client: ApiClient,
    kind: ResourceKind,
    page: Page,
    state: QuerySetState,
}

impl QuerySet {
    /// Fetches the first page and builds a cursor positioned before its
    /// first object.
    pub(crate) async fn new(client: &ApiClient, kind: ResourceKind) -> Result<Self> {
        let page = client.get_page(kind).await?;
        let state = if page.results.is_empty() {
            QuerySetState::Pending
        } else {
            QuerySetState::Ready
        };
        debug!(kind = %kind, count = page.count, "opened queryset");
        Ok(Self {
            client: client.clone(),
            kind,
            page,
            state,
        })
    }

    /// Returns the next object, fetching further pages as needed.
    ///
    /// `Ok(None)` means the collection is exhausted. An object that fails
    /// to decode is reported as an error and skipped; the cursor itself
    /// stays usable. A failed page fetch is terminal.
    pub async fn try_next(&mut self) -> Result<Option<Model>> {
        loop {
            match self.state {
                QuerySetState::Exhausted | QuerySetState::Failed => return Ok(None),
                QuerySetState::Ready => {
                    if let Some(raw) = self.page.results.pop_front() {
                        if self.page.results.is_empty() {
                            self.state = QuerySetState::Pending;
                        }
                        return Model::from_value(self.kind, raw).map(Some);
                    }
                    self.state = QuerySetState::Pending;
                }
                QuerySetState::Pending => {
                    let Some(next) = self.page.next_url().map(str::to_owned) else {
                        self.state = QuerySetState::Exhausted;
                        debug!(kind = %self.kind, "queryset exhausted");
                        return Ok(None);
                    };
                    match fetch_page(&self.client, &next).await {
                        Ok(page) => {
                            debug!(
                                kind = %self.kind,
                                url = %next,
                                buffered = page.results.len(),
                                "fetched next page"
                            );
                            self.page = page;
                            self.state = QuerySetState::Ready;
                        }
                        Err(err) => {
                            self.state = QuerySetState::Failed;
                            return Err(err);
                        }
                    }
                }
            }
        }
    }

    /// Total object count reported by the most recently fetched page.
    pub fn count(&self) -> u64 {
        self.page.count
    }

    /// The resource kind this cursor walks.
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Current position in the page-walk lifecycle.
    pub fn state(&self) -> QuerySetState {
        self.state
    }

    /// Returns `true` once every page has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.state == QuerySetState::Exhausted
    }

    /// Returns `true` once iteration has failed.
    pub fn is_failed(&self) -> bool {
        self.state == QuerySetState::Failed
    }

    /// Drains the remaining objects into a vector.
    pub async fn try_collect(mut self) -> Result<Vec<Model>> {
        let mut items = Vec::with_capacity(self.page.results.len());
        while let Some(model) = self.try_next().await? {
            items.push(model);
        }
        Ok(items)
    }

    /// Converts the cursor into a [`Stream`] of objects.
    ///
    /// The stream yields the first error as an item and then ends, even
    /// where [`try_next`](Self::try_next) would have kept going.
    pub fn into_stream(self) -> impl Stream<Item = Result<Model>> {
        stream::try_unfold(self, |mut queryset| async move {
            let item = queryset.try_next().await?;
            Ok(item.map(|model| (model, queryset)))
        })
    }
}

impl fmt::Display for QuerySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuerySet<{}>: {} objects", self.kind, self.count())
    }
}

/// GET a page URL and decode it, mapping non-success statuses to
/// page-fetch errors.
async fn fetch_page(client: &ApiClient, url: &str) -> Result<Page> {
    let response = client.get_url(url).await?;
    if !response.is_success() {
        return Err(Error::page_fetch(response.status, url));
    }
    Ok(serde_json::from_str(&response.body)?)
}
