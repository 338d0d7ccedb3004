//! HTTP-level integration tests for the `/event` endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_empty, post_json, seed_event};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: GET /event before bootstrap returns 404 NOT_CONFIGURED
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn event_summary_without_bootstrap_returns_not_configured(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/event").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_CONFIGURED");
}

// ---------------------------------------------------------------------------
// Test: GET /event returns the inventory record and confirmed count
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn event_summary_returns_inventory_and_count(pool: PgPool) {
    seed_event(&pool, 10).await;
    let app = build_test_app(pool);

    post_json(
        app.clone(),
        "/reservations",
        json!({"partnerId": "partner-a", "seats": 2}),
    )
    .await;
    post_json(
        app.clone(),
        "/reservations",
        json!({"partnerId": "partner-b", "seats": 3}),
    )
    .await;

    let response = get(app, "/event").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["event"]["eventId"], common::TEST_EVENT_ID);
    assert_eq!(json["event"]["totalSeats"], 10);
    assert_eq!(json["event"]["availableSeats"], 5);
    assert_eq!(json["reservationCount"], 2);
}

// ---------------------------------------------------------------------------
// Test: reservationCount excludes cancelled reservations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn event_summary_count_excludes_cancelled(pool: PgPool) {
    seed_event(&pool, 10).await;
    let app = build_test_app(pool);

    let created = body_json(
        post_json(
            app.clone(),
            "/reservations",
            json!({"partnerId": "partner-a", "seats": 2}),
        )
        .await,
    )
    .await;
    post_json(
        app.clone(),
        "/reservations",
        json!({"partnerId": "partner-b", "seats": 3}),
    )
    .await;

    let id = created["reservation"]["reservationId"]
        .as_str()
        .expect("reservationId should be a string")
        .to_string();
    let cancel = post_empty(app.clone(), &format!("/reservations/{id}/cancel")).await;
    assert_eq!(cancel.status(), StatusCode::OK);

    let json = body_json(get(app, "/event").await).await;
    assert_eq!(json["reservationCount"], 1);
    assert_eq!(json["event"]["availableSeats"], 7);
}
