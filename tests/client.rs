//! `NexonClient` against an in-process HTTP server standing in for the Nexon Open API.

mod common;

use axum::extract::{Query, RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use common::RecordingSurface;
use maplestat::api::{NexonClient, API_KEY_HEADER};
use maplestat::domain::{DateStamp, EquipmentItem, Identity};
use maplestat::{LookupError, SearchOrchestrator, SearchState};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

const API_KEY: &str = "test-api-key";

#[derive(Debug, Clone)]
struct SeenRequest {
    path: String,
    raw_query: Option<String>,
    api_key: Option<String>,
}

#[derive(Clone, Default)]
struct Seen(Arc<Mutex<Vec<SeenRequest>>>);

impl Seen {
    fn record(&self, path: &str, headers: &HeaderMap, raw_query: Option<String>) {
        self.0.lock().unwrap().push(SeenRequest {
            path: path.to_string(),
            raw_query,
            api_key: headers
                .get(API_KEY_HEADER)
                .and_then(|v| v.to_str().ok())
                .map(String::from),
        });
    }

    fn requests(&self) -> Vec<SeenRequest> {
        self.0.lock().unwrap().clone()
    }
}

type Params = Query<HashMap<String, String>>;

fn nexon_error(status: StatusCode, name: &str, message: &str) -> Response {
    (status, Json(json!({ "error": { "name": name, "message": message } }))).into_response()
}

async fn id(
    State(seen): State<Seen>,
    headers: HeaderMap,
    RawQuery(raw): RawQuery,
    Query(params): Params,
) -> Response {
    seen.record("/id", &headers, raw);
    match params.get("character_name").map(String::as_str) {
        Some("Alice") => Json(json!({ "ocid": "abc123" })).into_response(),
        Some("Broken") => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        Some("Throttled") => nexon_error(StatusCode::TOO_MANY_REQUESTS, "OPENAPI00007", "rate limited"),
        Some("Garbled") => (StatusCode::OK, "<html>not json</html>").into_response(),
        Some(other) if other.contains(' ') || other.contains('&') => {
            Json(json!({ "ocid": format!("echo:{other}") })).into_response()
        }
        _ => nexon_error(StatusCode::NOT_FOUND, "OPENAPI00004", "character not found"),
    }
}

async fn basic(
    State(seen): State<Seen>,
    headers: HeaderMap,
    RawQuery(raw): RawQuery,
    Query(params): Params,
) -> Response {
    seen.record("/character/basic", &headers, raw);
    if params.get("ocid").map(String::as_str) != Some("abc123") {
        return nexon_error(StatusCode::BAD_REQUEST, "OPENAPI00004", "invalid ocid");
    }
    Json(json!({
        "date": "2024-06-14T00:00+09:00",
        "character_name": "Alice",
        "world_name": "Scania",
        "character_gender": "Female",
        "character_class": "Hero",
        "character_class_level": "6",
        "character_level": 250,
        "character_exp": 0,
        "character_exp_rate": "0.000",
        "character_guild_name": null,
        "character_image": "https://open.api.nexon.com/static/maplestory/character/look/abc123"
    }))
    .into_response()
}

async fn item_equipment(
    State(seen): State<Seen>,
    headers: HeaderMap,
    RawQuery(raw): RawQuery,
    Query(params): Params,
) -> Response {
    seen.record("/character/item-equipment", &headers, raw);
    if params.get("ocid").map(String::as_str) == Some("broken-equipment") {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }
    Json(json!({
        "date": "2024-06-14T00:00+09:00",
        "character_gender": "Female",
        "character_class": "Hero",
        "item_equipment": [
            { "item_equipment_part": "Weapon", "item_equipment_slot": "Weapon", "item_name": "Genesis" }
        ]
    }))
    .into_response()
}

async fn spawn_server() -> (String, Seen) {
    let seen = Seen::default();
    let app = Router::new()
        .route("/maplestory/v1/id", get(id))
        .route("/maplestory/v1/character/basic", get(basic))
        .route("/maplestory/v1/character/item-equipment", get(item_equipment))
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/maplestory/v1"), seen)
}

fn yesterday_of_mid_june() -> DateStamp {
    DateStamp::day_before(mid_june())
}

fn mid_june() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

#[tokio::test]
async fn resolves_identity_with_api_key_header() {
    let (base_url, seen) = spawn_server().await;
    let client = NexonClient::new(base_url, API_KEY);

    let identity = client.resolve_identity("Alice").await.unwrap();

    assert_eq!(identity.ocid(), "abc123");
    let requests = seen.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/id");
    assert_eq!(requests[0].api_key.as_deref(), Some(API_KEY));
    assert_eq!(requests[0].raw_query.as_deref(), Some("character_name=Alice"));
}

#[tokio::test]
async fn nickname_is_percent_encoded_as_a_uri_component() {
    let (base_url, seen) = spawn_server().await;
    let client = NexonClient::new(base_url, API_KEY);

    for nickname in ["두부 맛", "A&B=C"] {
        let identity = client.resolve_identity(nickname).await.unwrap();
        assert_eq!(identity.ocid(), format!("echo:{nickname}"));
    }

    let requests = seen.requests();
    let korean = requests[0].raw_query.clone().unwrap().to_ascii_uppercase();
    assert!(korean.starts_with("CHARACTER_NAME=%EB%91%90"));
    assert!(korean.contains("%20"));
    assert!(!korean.contains('+'));

    assert_eq!(
        requests[1].raw_query.as_deref(),
        Some("character_name=A%26B%3DC")
    );
}

#[tokio::test]
async fn missing_character_maps_to_not_found() {
    let (base_url, _seen) = spawn_server().await;
    let client = NexonClient::new(base_url, API_KEY);

    let err = client.resolve_identity("Ghost").await.unwrap_err();

    assert!(matches!(err, LookupError::NotFound));
}

#[tokio::test]
async fn other_statuses_map_to_upstream_errors() {
    let (base_url, _seen) = spawn_server().await;
    let client = NexonClient::new(base_url, API_KEY);

    let err = client.resolve_identity("Broken").await.unwrap_err();
    assert!(matches!(
        &err,
        LookupError::Upstream { status: 500, status_text } if status_text == "Internal Server Error"
    ));

    let err = client.resolve_identity("Throttled").await.unwrap_err();
    assert_eq!(err.to_string(), "upstream request failed: 429 Too Many Requests");
}

#[tokio::test]
async fn undecodable_body_is_a_network_error() {
    let (base_url, _seen) = spawn_server().await;
    let client = NexonClient::new(base_url, API_KEY);

    let err = client.resolve_identity("Garbled").await.unwrap_err();

    assert!(matches!(err, LookupError::Network(_)));
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = NexonClient::new(format!("http://{addr}/maplestory/v1"), API_KEY);

    let err = client.resolve_identity("Alice").await.unwrap_err();

    assert!(matches!(err, LookupError::Network(_)));
}

#[tokio::test]
async fn fetches_profile_for_ocid_and_date() {
    let (base_url, seen) = spawn_server().await;
    let client = NexonClient::new(base_url, API_KEY);

    let profile = client
        .fetch_profile(&Identity::new("abc123"), yesterday_of_mid_june())
        .await
        .unwrap();

    assert_eq!(profile.name, "Alice");
    assert_eq!(profile.world_name, "Scania");
    assert_eq!(profile.level, 250);
    assert_eq!(profile.class_name, "Hero");

    let request = &seen.requests()[0];
    assert_eq!(request.path, "/character/basic");
    assert_eq!(request.raw_query.as_deref(), Some("ocid=abc123&date=2024-06-14"));
    assert_eq!(request.api_key.as_deref(), Some(API_KEY));
}

#[tokio::test]
async fn fetches_equipment_in_order() {
    let (base_url, _seen) = spawn_server().await;
    let client = NexonClient::new(base_url, API_KEY);

    let equipment = client
        .fetch_equipment(&Identity::new("abc123"), yesterday_of_mid_june())
        .await
        .unwrap();

    assert_eq!(equipment.items(), [EquipmentItem::new("Weapon", "Genesis")]);
}

#[tokio::test]
async fn fetch_errors_map_to_upstream() {
    let (base_url, _seen) = spawn_server().await;
    let client = NexonClient::new(base_url, API_KEY);

    let err = client
        .fetch_profile(&Identity::new("unknown"), yesterday_of_mid_june())
        .await
        .unwrap_err();
    assert!(matches!(err, LookupError::Upstream { status: 400, .. }));

    let err = client
        .fetch_equipment(&Identity::new("broken-equipment"), yesterday_of_mid_june())
        .await
        .unwrap_err();
    assert!(matches!(err, LookupError::Upstream { status: 503, .. }));
}

#[tokio::test]
async fn end_to_end_search_over_http() {
    let (base_url, seen) = spawn_server().await;
    let orchestrator = SearchOrchestrator::new(
        NexonClient::new(base_url, API_KEY),
        RecordingSurface::default(),
    )
    .with_clock(mid_june);

    let result = orchestrator.search("Alice").await;

    assert!(result.is_success());
    let results = orchestrator.surface().results();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].level, "250");
    assert_eq!(results[0].equipment, ["Weapon: Genesis"]);
    assert_eq!(orchestrator.state(), SearchState::Displayed(results[0].clone()));
    assert!(!orchestrator.surface().loading_visible());

    let requests = seen.requests();
    assert_eq!(requests.len(), 3);
    assert!(requests.iter().all(|r| r.api_key.as_deref() == Some(API_KEY)));
}

#[tokio::test]
async fn end_to_end_not_found_makes_a_single_request() {
    let (base_url, seen) = spawn_server().await;
    let orchestrator = SearchOrchestrator::new(
        NexonClient::new(base_url, API_KEY),
        RecordingSurface::default(),
    );

    let result = orchestrator.search("Ghost").await;

    assert_eq!(result.message().as_deref(), Some("character not found"));
    assert_eq!(seen.requests().len(), 1);
    assert_eq!(orchestrator.surface().errors(), ["character not found"]);
}
