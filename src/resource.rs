//! Resource kinds
//!
//! The catalog exposes two listable resource collections. Every `Model` and
//! `QuerySet` carries a `ResourceKind` tag; endpoint paths, decoders and
//! display labels are all selected by matching on it, so kind dispatch lives
//! in one place instead of string comparisons scattered across methods.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A catalog resource collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Characters (`/people/`)
    People,
    /// Films (`/films/`)
    Films,
}

impl ResourceKind {
    /// All supported resource kinds
    pub const ALL: [ResourceKind; 2] = [ResourceKind::People, ResourceKind::Films];

    /// The listing endpoint path segment for this kind
    pub fn endpoint(&self) -> &'static str {
        match self {
            ResourceKind::People => "people",
            ResourceKind::Films => "films",
        }
    }

    /// The human-readable label for one record of this kind
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::People => "Person",
            ResourceKind::Films => "Film",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}

impl FromStr for ResourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "people" => Ok(ResourceKind::People),
            "films" => Ok(ResourceKind::Films),
            other => Err(Error::unsupported_resource(other)),
        }
    }
}
