//! End-to-end tests for the campus HTTP API.
//!
//! Tests exercise the full stack: HTTP request -> axum router -> handler ->
//! CampusService -> route engine -> HTTP response. Requests are sent with
//! `tower::ServiceExt::oneshot` without starting a network server.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

use campus_server::router::build_router;
use campus_server::state::AppState;

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

fn test_app() -> Router {
    build_router(AppState::campus())
}

/// Sends a GET request and returns (status, json).
async fn get_json(app: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap_or(json!(null));
    (status, json)
}

// ---------------------------------------------------------------------------
// /api/graph
// ---------------------------------------------------------------------------

#[tokio::test]
async fn graph_lists_locations_and_paths() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/graph").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nodes"].as_array().unwrap().len(), 10);
    assert_eq!(body["edges"].as_array().unwrap().len(), 14);
    assert_eq!(
        body["nodes"][0],
        json!({"id": 0, "name": "Administration", "x": 150.0, "y": 150.0, "type": "admin"})
    );
    assert_eq!(
        body["edges"][13],
        json!({"from": 7, "to": 9, "weight": 400, "type": "road"})
    );
}

// ---------------------------------------------------------------------------
// /api/dijkstra
// ---------------------------------------------------------------------------

#[tokio::test]
async fn dijkstra_administration_to_laboratory() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/dijkstra?start=0&end=9").await;

    assert_eq!(status, StatusCode::OK, "body: {body}");
    assert_eq!(body["algorithm"], "dijkstra");
    assert_eq!(body["startName"], "Administration");
    assert_eq!(body["endName"], "Laboratory");
    assert_eq!(body["distance"], 700);
    assert_eq!(body["path"], json!([0, 1, 5, 8, 9]));
    assert_eq!(
        body["complexity"],
        json!({
            "time": "O((V + E) log V)",
            "space": "O(V)",
            "description": "Using min-heap priority queue"
        })
    );

    let steps = body["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 21);

    let first = &steps[0];
    assert_eq!(first["step"], 0);
    assert_eq!(first["node"], -1);
    assert_eq!(first["action"], "Starting at Administration");
    assert_eq!(first["distances"], json!([0, -1, -1, -1, -1, -1, -1, -1, -1, -1]));
    assert_eq!(first["previous"], json!([-1, -1, -1, -1, -1, -1, -1, -1, -1, -1]));
    assert_eq!(first["queue"], json!([0]));

    let last = steps.last().unwrap();
    assert_eq!(last["node"], 9);
    assert_eq!(last["action"], "Reached destination: Laboratory");
    assert_eq!(last["visited"], json!(vec![true; 10]));
    assert_eq!(last["previous"], json!([-1, 0, 1, 2, 0, 1, 2, 3, 5, 8]));

    for (index, step) in steps.iter().enumerate() {
        assert_eq!(step["step"], index);
    }
}

#[tokio::test]
async fn dijkstra_same_start_and_end() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/dijkstra?start=3&end=3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["distance"], 0);
    assert_eq!(body["path"], json!([3]));
}

#[tokio::test]
async fn dijkstra_is_deterministic() {
    let app = test_app();
    let (_, first) = get_json(&app, "/api/dijkstra?start=4&end=7").await;
    let (_, second) = get_json(&app, "/api/dijkstra?start=4&end=7").await;
    assert_eq!(first.to_string(), second.to_string());
}

#[tokio::test]
async fn dijkstra_missing_parameter_is_bad_request() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/dijkstra?start=0").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert!(body["error"]["message"].as_str().unwrap().contains("end"));
}

#[tokio::test]
async fn dijkstra_non_integer_parameter_is_bad_request() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/dijkstra?start=library&end=9").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn dijkstra_unknown_location_is_not_found() {
    let app = test_app();
    for uri in ["/api/dijkstra?start=0&end=10", "/api/dijkstra?start=-3&end=1"] {
        let (status, body) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}

// ---------------------------------------------------------------------------
// /api/search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_decodes_percent_and_plus() {
    let app = test_app();
    for uri in ["/api/search?query=Main%20Gate", "/api/search?query=main+gate"] {
        let (status, body) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body["found"], true);
        assert_eq!(body["exact"], 2);
        assert_eq!(body["results"][0]["name"], "Main Gate");
    }
}

#[tokio::test]
async fn search_without_match() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/search?query=Observatory").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["found"], false);
    assert!(body["exact"].is_null());
    assert_eq!(body["results"], json!([]));
}

#[tokio::test]
async fn search_requires_query() {
    let app = test_app();
    let (status, _) = get_json(&app, "/api/search").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// /api/sort
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sort_from_administration() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/sort?reference=0").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["referenceName"], "Administration");
    let order: Vec<u64> = body["sorted"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["id"].as_u64().unwrap())
        .collect();
    assert_eq!(order, vec![0, 4, 1, 5, 2, 8, 6, 9, 3, 7]);
    assert_eq!(body["sorted"][1]["distance"], 200);
    assert_eq!(body["sorted"][1]["type"], "cafeteria");
}

#[tokio::test]
async fn sort_unknown_reference() {
    let app = test_app();
    let (status, _) = get_json(&app, "/api/sort?reference=99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Fallback and middleware
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_endpoint_is_json_404() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/unknown").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Endpoint not found"}));
}

#[tokio::test]
async fn responses_allow_any_origin() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/graph")
                .header(header::ORIGIN, "http://localhost:5173")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
