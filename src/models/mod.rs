//! Typed resource models and kind-based dispatch.
//!
//! # Overview
//!
//! The models module provides:
//! - `Person`, `Film` - Typed records for the supported resources
//! - `Model` - Tagged union over the record types, dispatched by
//!   [`ResourceKind`]
//!
//! Raw objects arrive as JSON; decoding one into the wrong shape is a
//! [`Decode`](crate::Error::Decode) error, never a panic.

mod types;

pub use types::{Film, Person};

use std::fmt;

use crate::error::Result;
use crate::http::ApiClient;
use crate::queryset::QuerySet;
use crate::resource::ResourceKind;
use crate::types::JsonValue;

// ============================================================================
// Model
// ============================================================================

/// A decoded object of any supported resource kind.
///
/// Which variant a payload decodes into is chosen by the caller-supplied
/// [`ResourceKind`], not guessed from the payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Model {
    /// A person record.
    Person(Person),
    /// A film record.
    Film(Film),
}

impl Model {
    /// Decodes a raw JSON value as the given kind.
    pub fn from_value(kind: ResourceKind, value: JsonValue) -> Result<Self> {
        match kind {
            ResourceKind::People => Ok(Self::Person(serde_json::from_value(value)?)),
            ResourceKind::Films => Ok(Self::Film(serde_json::from_value(value)?)),
        }
    }

    /// Decodes a JSON string as the given kind.
    pub fn from_json(kind: ResourceKind, payload: &str) -> Result<Self> {
        match kind {
            ResourceKind::People => Ok(Self::Person(serde_json::from_str(payload)?)),
            ResourceKind::Films => Ok(Self::Film(serde_json::from_str(payload)?)),
        }
    }

    /// Fetches a single object by id.
    pub async fn get(client: &ApiClient, kind: ResourceKind, id: u64) -> Result<Self> {
        let value = client.get_by_id(kind, id).await?;
        Self::from_value(kind, value)
    }

    /// Opens a cursor over every object of the given kind.
    pub async fn all(client: &ApiClient, kind: ResourceKind) -> Result<QuerySet> {
        QuerySet::new(client, kind).await
    }

    /// The kind this object belongs to.
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Person(_) => ResourceKind::People,
            Self::Film(_) => ResourceKind::Films,
        }
    }

    /// Returns the person record, if this is one.
    pub fn as_person(&self) -> Option<&Person> {
        match self {
            Self::Person(person) => Some(person),
            Self::Film(_) => None,
        }
    }

    /// Returns the film record, if this is one.
    pub fn as_film(&self) -> Option<&Film> {
        match self {
            Self::Film(film) => Some(film),
            Self::Person(_) => None,
        }
    }

    /// Consumes the model, returning the person record if this is one.
    pub fn into_person(self) -> Option<Person> {
        match self {
            Self::Person(person) => Some(person),
            Self::Film(_) => None,
        }
    }

    /// Consumes the model, returning the film record if this is one.
    pub fn into_film(self) -> Option<Film> {
        match self {
            Self::Film(film) => Some(film),
            Self::Person(_) => None,
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Person(person) => person.fmt(f),
            Self::Film(film) => film.fmt(f),
        }
    }
}

impl From<Person> for Model {
    fn from(person: Person) -> Self {
        Self::Person(person)
    }
}

impl From<Film> for Model {
    fn from(film: Film) -> Self {
        Self::Film(film)
    }
}

#[cfg(test)]
mod tests;
