//! Event entity model: the single seat-inventory record.

use serde::Serialize;
use sqlx::FromRow;
use ticketboss_core::types::{DbId, Timestamp};

/// A row from the `events` table.
///
/// Serialized in camelCase: the public API contract exposes
/// `eventId`, `totalSeats`, `availableSeats`, etc.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: DbId,
    pub event_id: String,
    pub name: String,
    pub total_seats: i32,
    pub available_seats: i32,
    /// Incremented on every successful inventory mutation.
    pub version: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
