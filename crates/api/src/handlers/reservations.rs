//! Handlers for the `/reservations` resource.
//!
//! Create and cancel delegate to the allocation protocol; neither handler
//! ever reads a seat count and writes it back. The conditional updates in
//! `ticketboss_db` are the only inventory mutations in the system.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use ticketboss_core::reservation;
use ticketboss_db::allocation;
use ticketboss_db::models::event::Event;
use ticketboss_db::models::reservation::{CreateReservation, Reservation};
use ticketboss_db::repositories::ReservationRepo;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response payload for `POST /reservations`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationResponse {
    pub reservation: Reservation,
    /// Inventory snapshot taken by the same atomic update that debited the
    /// seats.
    pub event: Event,
}

/// Response payload for `GET /reservations`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationListResponse {
    pub reservations: Vec<Reservation>,
}

/// Response payload for `POST /reservations/{id}/cancel`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelReservationResponse {
    pub message: &'static str,
    pub reservation: Reservation,
    pub event: Event,
}

/// POST /reservations
///
/// Validates input before any store access, then runs the reserve protocol.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateReservation>,
) -> AppResult<(StatusCode, Json<CreateReservationResponse>)> {
    let partner_id = input.partner_id.unwrap_or_default();
    let seats = input.seats.unwrap_or(0);
    reservation::validate_partner_id(&partner_id)?;
    reservation::validate_seats(seats, state.config.max_seats_per_request)?;

    let (reservation, event) =
        allocation::reserve(&state.pool, &state.config.event_id, &partner_id, seats).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateReservationResponse { reservation, event }),
    ))
}

/// GET /reservations
///
/// Returns all reservations, most recently created first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ReservationListResponse>> {
    let reservations = ReservationRepo::list_all(&state.pool).await?;
    Ok(Json(ReservationListResponse { reservations }))
}

/// POST /reservations/{id}/cancel
///
/// Cancels a confirmed reservation and credits its seats back to the pool.
pub async fn cancel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<CancelReservationResponse>> {
    let reservation_id = Uuid::parse_str(&id)
        .map_err(|_| AppError::BadRequest("reservation id must be a valid UUID".to_string()))?;

    let (reservation, event) =
        allocation::cancel(&state.pool, &state.config.event_id, reservation_id).await?;

    Ok(Json(CancelReservationResponse {
        message: "cancelled",
        reservation,
        event,
    }))
}
