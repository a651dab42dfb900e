//! HTTP-level integration tests for `GET /api/dashboard/stats`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json_auth, register_and_login};
use sqlx::PgPool;

/// The stats endpoint requires authentication.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_stats_require_auth(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::get(app, "/api/dashboard/stats").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Totals and distributions reflect only the caller's cellar.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_stats_payload(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_user_id, token) = register_and_login(&app, "cantina@test.com", "password_123").await;
    let (_other_id, other_token) = register_and_login(&app, "altro@test.com", "password_123").await;

    let body = serde_json::json!({
        "name": "Barolo", "wine_type": "rosso", "region": "Piemonte",
        "quantity": 2, "purchase_price": 30.0
    });
    post_json_auth(app.clone(), "/api/wines", body, &token).await;

    let body = serde_json::json!({ "name": "Vermentino", "wine_type": "bianco", "quantity": 3 });
    post_json_auth(app.clone(), "/api/wines", body, &token).await;

    // A bottle in someone else's cellar must not show up.
    let body = serde_json::json!({ "name": "Intruso", "wine_type": "rosso" });
    post_json_auth(app.clone(), "/api/wines", body, &other_token).await;

    let response = get_auth(app, "/api/dashboard/stats", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["total_bottles"], 5);
    assert_eq!(json["distinct_wines"], 2);
    assert_eq!(json["cellar_value"], 60.0);

    let by_type = json["by_type"].as_array().expect("by_type must be an array");
    assert_eq!(by_type.len(), 2);
    assert_eq!(by_type[0]["label"], "bianco");
    assert_eq!(by_type[0]["bottles"], 3);

    let by_region = json["by_region"]
        .as_array()
        .expect("by_region must be an array");
    let labels: Vec<&str> = by_region
        .iter()
        .map(|b| b["label"].as_str().unwrap())
        .collect();
    assert!(labels.contains(&"Piemonte"));
    assert!(labels.contains(&"Sconosciuta"), "unset regions are bucketed");
}

/// An empty cellar reports zeroed totals and empty distributions.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_stats_empty_cellar(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_user_id, token) = register_and_login(&app, "vuota@test.com", "password_123").await;

    let response = get_auth(app, "/api/dashboard/stats", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["total_bottles"], 0);
    assert_eq!(json["distinct_wines"], 0);
    assert!(json["cellar_value"].is_null());
    assert!(json["average_vivino_rating"].is_null());
    assert!(json["by_type"].as_array().unwrap().is_empty());
}
