//! Repository for the `events` table.
//!
//! Every inventory mutation is a single atomic conditional UPDATE; there is
//! deliberately no read-then-decide-then-write path for seat counts.

use sqlx::PgPool;

use crate::models::event::Event;

/// Column list for `events` queries.
const COLUMNS: &str = "\
    id, event_id, name, total_seats, available_seats, version, \
    created_at, updated_at";

/// Provides access to the single seat-inventory record.
pub struct EventRepo;

impl EventRepo {
    /// Upsert the configured event at startup.
    ///
    /// Creates the row with a full seat pool if absent; otherwise refreshes
    /// `name` and `total_seats` only. `available_seats` and `version` are
    /// set on insert and never overwritten by bootstrap.
    pub async fn bootstrap(
        pool: &PgPool,
        event_id: &str,
        name: &str,
        total_seats: i32,
    ) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events (event_id, name, total_seats, available_seats, version) \
             VALUES ($1, $2, $3, $3, 0) \
             ON CONFLICT (event_id) DO UPDATE \
             SET name = EXCLUDED.name, total_seats = EXCLUDED.total_seats, \
                 updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(event_id)
            .bind(name)
            .bind(total_seats)
            .fetch_one(pool)
            .await
    }

    /// Find the event by its external identifier.
    pub async fn find_by_event_id(
        pool: &PgPool,
        event_id: &str,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE event_id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(event_id)
            .fetch_optional(pool)
            .await
    }

    /// Atomically debit seats from the pool, conditioned on enough seats
    /// being available at the time of update.
    ///
    /// Returns the post-update row, or `None` if no row matched the guard
    /// (insufficient seats, or no such event), in which case nothing was
    /// written. Concurrent callers racing for the last seats are serialized
    /// by the store; exactly the requests whose cumulative debit fits
    /// succeed.
    pub async fn debit_seats(
        pool: &PgPool,
        event_id: &str,
        seats: i32,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events \
             SET available_seats = available_seats - $2, version = version + 1, \
                 updated_at = NOW() \
             WHERE event_id = $1 AND available_seats >= $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(event_id)
            .bind(seats)
            .fetch_optional(pool)
            .await
    }

    /// Atomically credit seats back to the pool.
    ///
    /// Used both for cancellations and for compensating a failed
    /// reservation insert after a successful debit. Returns `None` if the
    /// event row is missing.
    pub async fn credit_seats(
        pool: &PgPool,
        event_id: &str,
        seats: i32,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events \
             SET available_seats = available_seats + $2, version = version + 1, \
                 updated_at = NOW() \
             WHERE event_id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(event_id)
            .bind(seats)
            .fetch_optional(pool)
            .await
    }
}
