//! Reservation entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ticketboss_core::types::{DbId, Timestamp};
use uuid::Uuid;

/// A row from the `reservations` table.
///
/// `cancelled_at` is set exactly once, iff `status` is `cancelled`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: DbId,
    pub reservation_id: Uuid,
    pub partner_id: String,
    pub seats: i32,
    pub status: String,
    pub created_at: Timestamp,
    pub cancelled_at: Option<Timestamp>,
}

/// DTO for creating a reservation via `POST /reservations`.
///
/// Both fields are optional at the deserialization layer so that absent
/// fields surface as a 400 validation error rather than a body-parse
/// rejection; the handler validates presence and range before any store
/// access.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservation {
    pub partner_id: Option<String>,
    pub seats: Option<i32>,
}
