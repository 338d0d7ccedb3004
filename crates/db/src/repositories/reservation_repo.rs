//! Repository for the `reservations` table.
//!
//! Uses the status constants from `ticketboss_core::reservation` for all
//! transitions. Rows are never deleted; the table is the audit trail.

use sqlx::PgPool;
use ticketboss_core::reservation::{STATUS_CANCELLED, STATUS_CONFIRMED};
use uuid::Uuid;

use crate::models::reservation::Reservation;

/// Column list for `reservations` queries.
const COLUMNS: &str = "\
    id, reservation_id, partner_id, seats, status, created_at, cancelled_at";

/// Provides CRUD operations for reservation entries.
pub struct ReservationRepo;

impl ReservationRepo {
    /// Insert a new confirmed reservation.
    pub async fn create(
        pool: &PgPool,
        reservation_id: Uuid,
        partner_id: &str,
        seats: i32,
    ) -> Result<Reservation, sqlx::Error> {
        let query = format!(
            "INSERT INTO reservations (reservation_id, partner_id, seats, status) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(reservation_id)
            .bind(partner_id)
            .bind(seats)
            .bind(STATUS_CONFIRMED)
            .fetch_one(pool)
            .await
    }

    /// Find a reservation by its public identifier.
    pub async fn find_by_reservation_id(
        pool: &PgPool,
        reservation_id: Uuid,
    ) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reservations WHERE reservation_id = $1");
        sqlx::query_as::<_, Reservation>(&query)
            .bind(reservation_id)
            .fetch_optional(pool)
            .await
    }

    /// Atomically transition a reservation from confirmed to cancelled.
    ///
    /// The guard on current status protects against two concurrent cancels
    /// both passing the caller's initial read: only the request that wins
    /// the update gets the row back; the loser gets `None` and must not
    /// credit seats.
    pub async fn cancel_if_confirmed(
        pool: &PgPool,
        reservation_id: Uuid,
    ) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!(
            "UPDATE reservations \
             SET status = $2, cancelled_at = NOW() \
             WHERE reservation_id = $1 AND status = $3 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(reservation_id)
            .bind(STATUS_CANCELLED)
            .bind(STATUS_CONFIRMED)
            .fetch_optional(pool)
            .await
    }

    /// List all reservations, most recently created first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Reservation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reservations ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Reservation>(&query).fetch_all(pool).await
    }

    /// Count reservations currently holding seats.
    pub async fn count_confirmed(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM reservations WHERE status = $1")
                .bind(STATUS_CONFIRMED)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    /// Sum of seats held by confirmed reservations.
    ///
    /// Diagnostic for the core invariant: this must always equal
    /// `total_seats - available_seats` on the inventory record.
    pub async fn confirmed_seats(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (sum,): (i64,) = sqlx::query_as(
            "SELECT COALESCE(SUM(seats), 0) FROM reservations WHERE status = $1",
        )
        .bind(STATUS_CONFIRMED)
        .fetch_one(pool)
        .await?;
        Ok(sum)
    }
}
