//! Handlers for the `/event` resource.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use ticketboss_core::error::CoreError;
use ticketboss_db::models::event::Event;
use ticketboss_db::repositories::{EventRepo, ReservationRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response payload for `GET /event`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummaryResponse {
    pub event: Event,
    /// Number of reservations currently holding seats.
    pub reservation_count: i64,
}

/// GET /event
///
/// Returns the inventory record plus a count of confirmed reservations.
/// 404 if bootstrap has not created the event yet.
pub async fn summary(State(state): State<AppState>) -> AppResult<Json<EventSummaryResponse>> {
    let event = EventRepo::find_by_event_id(&state.pool, &state.config.event_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotConfigured(state.config.event_id.clone()))
        })?;

    let reservation_count = ReservationRepo::count_confirmed(&state.pool).await?;

    Ok(Json(EventSummaryResponse {
        event,
        reservation_count,
    }))
}
