use std::path::Path;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::Request;
use spotdb_core::Coordinate;
use tower::ServiceExt;

use super::*;

fn seeded_state() -> AppState {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("spots.yaml");
    let seed = spotdb_core::load_seed(&path).expect("load spots.yaml");
    AppState {
        store: SpotStore::from_seed(&seed),
        search_defaults: SearchDefaults::default(),
    }
}

fn test_app(state: AppState) -> Router {
    build_app(state, RateLimitState::new(120, Duration::from_secs(60)))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json = serde_json::from_slice(&body).expect("json parse");
    (status, json)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(
        app,
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request"),
    )
    .await
}

async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request"),
    )
    .await
}

fn spot_names(json: &serde_json::Value) -> Vec<String> {
    json["data"]["spots"]
        .as_array()
        .expect("spots array")
        .iter()
        .map(|s| s["name"].as_str().expect("name").to_string())
        .collect()
}

fn rooftop_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Rooftop Reading Nook",
        "description": "A quiet rooftop space in the old city",
        "vibe": "serene",
        "location": "Old City, Gwalior",
        "story": "Finished three novels up here last winter.",
        "latitude": 26.2156,
        "longitude": 78.1698,
        "tips": "Bring your own books\n\nAvoid during monsoon",
        "safety": 4.3
    })
}

#[test]
fn api_error_validation_error_maps_to_bad_request() {
    let response = ApiError::new("req-1", "validation_error", "invalid input").into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn api_error_not_found_maps_to_404() {
    let response = ApiError::new("req-1", "not_found", "missing").into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn api_error_unknown_code_maps_to_500() {
    let response = ApiError::new("req-1", "boom", "unexpected").into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn health_reports_spot_count() {
    let (status, json) = get_json(test_app(seeded_state()), "/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "ok");
    assert_eq!(json["data"]["spots"], 4);
    assert!(json["meta"]["request_id"].is_string());
}

#[tokio::test]
async fn search_defaults_return_all_spots_nearest_first() {
    let (status, json) = get_json(test_app(seeded_state()), "/api/v1/spots").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["total"], 4);
    assert_eq!(
        spot_names(&json),
        vec![
            "Artist's Corner at Phool Bagh",
            "Hidden Garden Café",
            "Sunset Point at Gwalior Fort",
            "Riverside Meditation Spot",
        ]
    );
    let first = &json["data"]["spots"][0];
    assert!(first["distance_km"].as_f64().expect("distance") < 1e-9);
}

#[tokio::test]
async fn search_filters_by_vibe_case_insensitively() {
    let (_, json) = get_json(
        test_app(seeded_state()),
        "/api/v1/spots?lat=26.2183&lng=78.1821&radius=10&vibe=serene",
    )
    .await;
    assert_eq!(
        spot_names(&json),
        vec!["Hidden Garden Café", "Riverside Meditation Spot"]
    );
    assert_eq!(json["data"]["total"], 2);
}

#[tokio::test]
async fn search_filters_by_term() {
    let (_, json) = get_json(test_app(seeded_state()), "/api/v1/spots?search=Sunset").await;
    assert_eq!(spot_names(&json), vec!["Sunset Point at Gwalior Fort"]);
}

#[tokio::test]
async fn search_with_tiny_radius_returns_only_the_spot_at_origin() {
    let (_, json) = get_json(
        test_app(seeded_state()),
        "/api/v1/spots?lat=26.2183&lng=78.1821&radius=0.001",
    )
    .await;
    assert_eq!(spot_names(&json), vec!["Artist's Corner at Phool Bagh"]);
}

#[tokio::test]
async fn search_with_malformed_numbers_uses_defaults() {
    let (status, json) = get_json(
        test_app(seeded_state()),
        "/api/v1/spots?lat=abc&lng=&radius=wide",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["total"], 4);
}

#[tokio::test]
async fn search_with_unknown_vibe_returns_empty_set() {
    let (status, json) = get_json(test_app(seeded_state()), "/api/v1/spots?vibe=Haunted").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["total"], 0);
    assert!(spot_names(&json).is_empty());
}

#[tokio::test]
async fn search_uses_configured_default_origin() {
    let state = AppState {
        search_defaults: SearchDefaults {
            origin: Coordinate::new(26.2089, 78.1654),
            radius_km: 0.5,
        },
        ..seeded_state()
    };
    let (_, json) = get_json(test_app(state), "/api/v1/spots").await;
    assert_eq!(spot_names(&json), vec!["Riverside Meditation Spot"]);
}

#[tokio::test]
async fn get_spot_returns_detail_with_stories() {
    let (status, json) = get_json(test_app(seeded_state()), "/api/v1/spots/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["name"], "Sunset Point at Gwalior Fort");
    let stories = json["data"]["stories"].as_array().expect("stories array");
    assert_eq!(stories.len(), 2);
    assert_eq!(stories[0]["author"], "Priya S.");
}

#[tokio::test]
async fn get_spot_returns_404_for_unknown_or_malformed_id() {
    for uri in ["/api/v1/spots/999", "/api/v1/spots/not-a-number"] {
        let (status, json) = get_json(test_app(seeded_state()), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(json["error"]["code"], "not_found");
    }
}

#[tokio::test]
async fn create_spot_returns_201_and_is_searchable() {
    let state = seeded_state();
    let (status, json) =
        post_json(test_app(state.clone()), "/api/v1/spots", &rooftop_body()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["id"], 5);
    assert_eq!(json["data"]["vibe"], "Serene");
    assert_eq!(json["data"]["rating"], 0.0);
    assert_eq!(json["data"]["stories_count"], 1);
    assert_eq!(
        json["data"]["tips"],
        serde_json::json!(["Bring your own books", "Avoid during monsoon"])
    );

    let (_, json) = get_json(test_app(state), "/api/v1/spots?search=rooftop").await;
    assert_eq!(spot_names(&json), vec!["Rooftop Reading Nook"]);
}

#[tokio::test]
async fn create_spot_reports_exhausted_ids_as_internal_error() {
    let seed = spotdb_core::parse_seed(
        r#"
spots:
  - id: 18446744073709551615
    name: "Edge of the Map"
    description: "The last id there is"
    vibe: serene
    latitude: 26.2
    longitude: 78.2
    location: "Gwalior"
    created_at: "2024-01-15T00:00:00Z"
"#,
    )
    .expect("parse seed");
    let state = AppState {
        store: SpotStore::from_seed(&seed),
        search_defaults: SearchDefaults::default(),
    };

    let (status, json) =
        post_json(test_app(state.clone()), "/api/v1/spots", &rooftop_body()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "internal_error");
    assert_eq!(state.store.len().await, 1);
}

#[tokio::test]
async fn create_spot_rejects_missing_field_by_name() {
    let mut body = rooftop_body();
    body.as_object_mut().expect("object").remove("story");

    let state = seeded_state();
    let (status, json) = post_json(test_app(state.clone()), "/api/v1/spots", &body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "missing required field: story");
    assert_eq!(state.store.len().await, 4, "no partial record is created");
}

#[tokio::test]
async fn create_spot_rejects_unknown_vibe() {
    let mut body = rooftop_body();
    body["vibe"] = serde_json::json!("Haunted");
    let (status, json) = post_json(test_app(seeded_state()), "/api/v1/spots", &body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"]["message"]
        .as_str()
        .expect("message")
        .contains("Haunted"));
}

#[tokio::test]
async fn create_story_prepends_to_spot() {
    let state = seeded_state();
    let (status, json) = post_json(
        test_app(state.clone()),
        "/api/v1/spots/2/stories",
        &serde_json::json!({ "content": "The masala chai lives up to the hype." }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["author"], "Anonymous");
    assert_eq!(json["data"]["likes"], 0);

    let (_, json) = get_json(test_app(state), "/api/v1/spots/2").await;
    assert_eq!(
        json["data"]["stories"][0]["content"],
        "The masala chai lives up to the hype."
    );
    assert_eq!(json["data"]["stories_count"], 3);
}

#[tokio::test]
async fn create_story_requires_content() {
    let (status, json) = post_json(
        test_app(seeded_state()),
        "/api/v1/spots/2/stories",
        &serde_json::json!({ "author": "Priya S." }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["message"], "missing required field: content");
}

#[tokio::test]
async fn create_story_for_unknown_spot_is_404() {
    let (status, json) = post_json(
        test_app(seeded_state()),
        "/api/v1/spots/77/stories",
        &serde_json::json!({ "content": "Where am I?" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "not_found");
}
