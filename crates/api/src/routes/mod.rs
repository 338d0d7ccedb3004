//! Route definitions.
//!
//! The public paths are the API contract and are mounted at root:
//!
//! ```text
//! GET  /                                  service banner
//! GET  /health                            service and database health
//! GET  /event                             inventory summary
//! GET  /reservations                      list reservations
//! POST /reservations                      create reservation
//! POST /reservations/{id}/cancel          cancel reservation
//! ```

pub mod event;
pub mod health;
pub mod reservations;

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Service banner returned from `GET /`.
#[derive(Debug, Serialize)]
pub struct ServiceInfoResponse {
    pub service: &'static str,
    pub routes: &'static [&'static str],
}

/// GET / -- minimal service banner listing the resource routes.
async fn service_info() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        service: "ticketboss",
        routes: &["/event", "/reservations"],
    })
}

/// Build the full application route tree.
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(service_info))
        .merge(health::router())
        .nest("/event", event::router())
        .nest("/reservations", reservations::router())
}
