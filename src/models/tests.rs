use std::time::Duration;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::error::Error;
use crate::http::ApiClientConfig;

fn test_client(base_url: &str) -> ApiClient {
    let config = ApiClientConfig::builder()
        .base_url(base_url)
        .max_retries(0)
        .backoff(Duration::from_millis(1), Duration::from_millis(1))
        .build();
    ApiClient::with_config(config)
}

fn luke() -> JsonValue {
    json!({
        "name": "Luke Skywalker",
        "height": "172",
        "mass": "77",
        "hair_color": "blond",
        "skin_color": "fair",
        "eye_color": "blue",
        "birth_year": "19BBY",
        "gender": "male",
        "homeworld": "https://swapi.dev/api/planets/1/",
        "films": [
            "https://swapi.dev/api/films/1/",
            "https://swapi.dev/api/films/2/"
        ],
        "species": [],
        "vehicles": ["https://swapi.dev/api/vehicles/14/"],
        "starships": ["https://swapi.dev/api/starships/12/"],
        "created": "2014-12-09T13:50:51.644000Z",
        "edited": "2014-12-20T21:17:56.891000Z",
        "url": "https://swapi.dev/api/people/1/"
    })
}

fn a_new_hope() -> JsonValue {
    json!({
        "title": "A New Hope",
        "episode_id": 4,
        "opening_crawl": "It is a period of civil war.",
        "director": "George Lucas",
        "producer": "Gary Kurtz, Rick McCallum",
        "release_date": "1977-05-25",
        "characters": ["https://swapi.dev/api/people/1/"],
        "planets": ["https://swapi.dev/api/planets/1/"],
        "starships": [],
        "vehicles": [],
        "species": [],
        "created": "2014-12-10T14:23:31.880000Z",
        "edited": "2014-12-20T19:49:45.256000Z",
        "url": "https://swapi.dev/api/films/1/"
    })
}

// ============================================================================
// Decoding Tests
// ============================================================================

#[test]
fn test_decode_person_full() {
    let model = Model::from_value(ResourceKind::People, luke()).unwrap();
    let person = model.as_person().unwrap();

    assert_eq!(person.name, "Luke Skywalker");
    assert_eq!(person.height.as_deref(), Some("172"));
    assert_eq!(person.birth_year.as_deref(), Some("19BBY"));
    assert_eq!(person.films.len(), 2);
    assert_eq!(person.starships.len(), 1);
    assert!(person.species.is_empty());
    assert_eq!(
        person.created.unwrap().date_naive(),
        NaiveDate::from_ymd_opt(2014, 12, 9).unwrap()
    );
}

#[test]
fn test_decode_person_minimal() {
    let model = Model::from_value(ResourceKind::People, json!({"name": "Leia Organa"})).unwrap();
    let person = model.into_person().unwrap();

    assert_eq!(person.name, "Leia Organa");
    assert_eq!(person.height, None);
    assert!(person.films.is_empty());
    assert_eq!(person.created, None);
    assert_eq!(person.url, None);
}

#[test]
fn test_decode_person_missing_name() {
    let err = Model::from_value(ResourceKind::People, json!({"height": "172"})).unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
}

#[test]
fn test_decode_person_ignores_unknown_fields() {
    let model = Model::from_value(
        ResourceKind::People,
        json!({"name": "Leia Organa", "midichlorians": 12000}),
    )
    .unwrap();

    assert_eq!(model.as_person().unwrap().name, "Leia Organa");
}

#[test]
fn test_decode_film_full() {
    let model = Model::from_value(ResourceKind::Films, a_new_hope()).unwrap();
    let film = model.as_film().unwrap();

    assert_eq!(film.title, "A New Hope");
    assert_eq!(film.episode_id, Some(4));
    assert_eq!(film.director.as_deref(), Some("George Lucas"));
    assert_eq!(
        film.release_date,
        Some(NaiveDate::from_ymd_opt(1977, 5, 25).unwrap())
    );
    assert_eq!(film.characters.len(), 1);
}

#[test]
fn test_decode_wrong_shape_for_kind() {
    // A film payload decoded as a person lacks the required name.
    let err = Model::from_value(ResourceKind::People, a_new_hope()).unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
}

#[test_case(ResourceKind::People; "people")]
#[test_case(ResourceKind::Films; "films")]
fn test_from_json_rejects_malformed_payload(kind: ResourceKind) {
    let err = Model::from_json(kind, "{not json").unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
}

#[test]
fn test_from_json_decodes_string_payload() {
    let payload = a_new_hope().to_string();
    let model = Model::from_json(ResourceKind::Films, &payload).unwrap();

    assert_eq!(model.kind(), ResourceKind::Films);
}

// ============================================================================
// Dispatch Tests
// ============================================================================

#[test]
fn test_kind_matches_variant() {
    let person = Model::from_value(ResourceKind::People, luke()).unwrap();
    let film = Model::from_value(ResourceKind::Films, a_new_hope()).unwrap();

    assert_eq!(person.kind(), ResourceKind::People);
    assert_eq!(film.kind(), ResourceKind::Films);
}

#[test]
fn test_variant_accessors() {
    let model = Model::from_value(ResourceKind::People, luke()).unwrap();

    assert!(model.as_person().is_some());
    assert!(model.as_film().is_none());
    assert!(model.clone().into_film().is_none());
    assert_eq!(model.into_person().unwrap().name, "Luke Skywalker");
}

#[test]
fn test_from_record_types() {
    let person: Person = serde_json::from_value(luke()).unwrap();
    let model = Model::from(person.clone());

    assert_eq!(model, Model::Person(person));
}

// ============================================================================
// Display Tests
// ============================================================================

#[test]
fn test_display_person() {
    let model = Model::from_value(ResourceKind::People, luke()).unwrap();

    assert_eq!(model.to_string(), "Person: Luke Skywalker");
}

#[test]
fn test_display_film() {
    let model = Model::from_value(ResourceKind::Films, a_new_hope()).unwrap();

    assert_eq!(model.to_string(), "Film: A New Hope");
}

// ============================================================================
// Fetch Tests
// ============================================================================

#[tokio::test]
async fn test_person_get() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/people/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(luke()))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let person = Person::get(&client, 1).await.unwrap();

    assert_eq!(person.name, "Luke Skywalker");
}

#[tokio::test]
async fn test_film_get() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/films/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(a_new_hope()))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let film = Film::get(&client, 1).await.unwrap();

    assert_eq!(film.title, "A New Hope");
    assert_eq!(film.episode_id, Some(4));
}

#[tokio::test]
async fn test_model_get_dispatches_by_kind() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/films/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(a_new_hope()))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let model = Model::get(&client, ResourceKind::Films, 1).await.unwrap();

    assert_eq!(model.kind(), ResourceKind::Films);
    assert_eq!(model.to_string(), "Film: A New Hope");
}

#[tokio::test]
async fn test_person_get_not_found() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/people/999/"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let err = Person::get(&client, 999).await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
}

#[tokio::test]
async fn test_person_all_opens_cursor() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/people/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [{"name": "Luke Skywalker"}]
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let mut queryset = Person::all(&client).await.unwrap();

    assert_eq!(queryset.count(), 1);
    assert_eq!(queryset.kind(), ResourceKind::People);
    let model = queryset.try_next().await.unwrap().unwrap();
    assert_eq!(model.to_string(), "Person: Luke Skywalker");
}
