use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::http::ApiClient;
use crate::queryset::QuerySet;
use crate::resource::ResourceKind;

// ============================================================================
// Person
// ============================================================================

/// A person from the catalog.
///
/// Only `name` is required. The service reports unknown values as strings
/// like `"unknown"` or `"n/a"` rather than omitting them, so the optional
/// fields are `None` only for genuinely absent data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Full name.
    pub name: String,
    /// Height in centimeters, as reported.
    pub height: Option<String>,
    /// Mass in kilograms, as reported.
    pub mass: Option<String>,
    /// Hair color.
    pub hair_color: Option<String>,
    /// Skin color.
    pub skin_color: Option<String>,
    /// Eye color.
    pub eye_color: Option<String>,
    /// Birth year in in-universe notation, e.g. `"19BBY"`.
    pub birth_year: Option<String>,
    /// Gender, as reported.
    pub gender: Option<String>,
    /// URL of the person's homeworld.
    pub homeworld: Option<String>,
    /// URLs of films this person appears in.
    #[serde(default)]
    pub films: Vec<String>,
    /// URLs of species this person belongs to.
    #[serde(default)]
    pub species: Vec<String>,
    /// URLs of vehicles this person has piloted.
    #[serde(default)]
    pub vehicles: Vec<String>,
    /// URLs of starships this person has piloted.
    #[serde(default)]
    pub starships: Vec<String>,
    /// When the record was created.
    pub created: Option<DateTime<Utc>>,
    /// When the record was last edited.
    pub edited: Option<DateTime<Utc>>,
    /// Canonical URL of this record.
    pub url: Option<String>,
}

impl Person {
    /// Fetches a single person by id.
    pub async fn get(client: &ApiClient, id: u64) -> Result<Self> {
        let value = client.get_by_id(ResourceKind::People, id).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Opens a cursor over every person in the catalog.
    pub async fn all(client: &ApiClient) -> Result<QuerySet> {
        QuerySet::new(client, ResourceKind::People).await
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", ResourceKind::People.label(), self.name)
    }
}

// ============================================================================
// Film
// ============================================================================

/// A film from the catalog.
///
/// Only `title` is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    /// Film title.
    pub title: String,
    /// Episode number within the saga.
    pub episode_id: Option<u32>,
    /// Opening crawl text.
    pub opening_crawl: Option<String>,
    /// Director name.
    pub director: Option<String>,
    /// Producer names, comma separated.
    pub producer: Option<String>,
    /// Theatrical release date.
    pub release_date: Option<NaiveDate>,
    /// URLs of people appearing in this film.
    #[serde(default)]
    pub characters: Vec<String>,
    /// URLs of planets appearing in this film.
    #[serde(default)]
    pub planets: Vec<String>,
    /// URLs of starships appearing in this film.
    #[serde(default)]
    pub starships: Vec<String>,
    /// URLs of vehicles appearing in this film.
    #[serde(default)]
    pub vehicles: Vec<String>,
    /// URLs of species appearing in this film.
    #[serde(default)]
    pub species: Vec<String>,
    /// When the record was created.
    pub created: Option<DateTime<Utc>>,
    /// When the record was last edited.
    pub edited: Option<DateTime<Utc>>,
    /// Canonical URL of this record.
    pub url: Option<String>,
}

impl Film {
    /// Fetches a single film by id.
    pub async fn get(client: &ApiClient, id: u64) -> Result<Self> {
        let value = client.get_by_id(ResourceKind::Films, id).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Opens a cursor over every film in the catalog.
    pub async fn all(client: &ApiClient) -> Result<QuerySet> {
        QuerySet::new(client, ResourceKind::Films).await
    }
}

impl fmt::Display for Film {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", ResourceKind::Films.label(), self.title)
    }
}
