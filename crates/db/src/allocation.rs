//! Seat allocation protocol.
//!
//! Moves seats between the available pool and committed reservations using
//! only single-row atomic conditional updates; there is no distributed lock
//! and no in-process coordination. The inventory update and the ledger write
//! are not atomic as a pair, so each multi-step operation carries a
//! compensation path that bounds the inconsistency window.

use sqlx::PgPool;
use ticketboss_core::reservation::STATUS_CANCELLED;
use uuid::Uuid;

use crate::models::event::Event;
use crate::models::reservation::Reservation;
use crate::repositories::{EventRepo, ReservationRepo};

/// Outcomes of the allocation protocol that are not plain storage faults.
#[derive(Debug, thiserror::Error)]
pub enum AllocationError {
    /// The conditional debit matched no row: the pool cannot cover the
    /// request. Nothing was written.
    #[error("not enough seats available")]
    InsufficientCapacity,

    /// No reservation with this identifier exists.
    #[error("reservation {0} not found")]
    NotFound(Uuid),

    /// The reservation was already cancelled before this request started.
    #[error("reservation {0} is already cancelled")]
    AlreadyCancelled(Uuid),

    /// A concurrent request cancelled the reservation between this
    /// request's read and its guarded transition.
    #[error("reservation {0} was already processed")]
    AlreadyProcessed(Uuid),

    /// A partial failure could not be compensated; seat counts and the
    /// reservation ledger no longer agree. Requires operator attention.
    #[error("seat inventory left in an inconsistent state: {0}")]
    Inconsistent(String),

    /// Underlying store failure with no inventory side effects pending.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Reserve `seats` for `partner_id` against the configured event.
///
/// Protocol:
/// 1. Atomic conditional debit on the inventory row (`available_seats >=
///    seats` guard). No match yields
///    [`AllocationError::InsufficientCapacity`] with no side effects.
/// 2. Insert the reservation entry with a fresh id.
/// 3. If the insert fails after the debit succeeded, credit the seats back
///    (best effort). A failed credit is escalated as
///    [`AllocationError::Inconsistent`], never swallowed.
///
/// Inputs are assumed validated; callers reject out-of-range `seats` before
/// touching the store.
pub async fn reserve(
    pool: &PgPool,
    event_id: &str,
    partner_id: &str,
    seats: i32,
) -> Result<(Reservation, Event), AllocationError> {
    let event = EventRepo::debit_seats(pool, event_id, seats)
        .await?
        .ok_or(AllocationError::InsufficientCapacity)?;

    let reservation_id = Uuid::new_v4();
    match ReservationRepo::create(pool, reservation_id, partner_id, seats).await {
        Ok(reservation) => Ok((reservation, event)),
        Err(insert_err) => {
            tracing::warn!(
                %reservation_id,
                partner_id,
                seats,
                error = %insert_err,
                "reservation insert failed after seat debit, crediting seats back"
            );
            match EventRepo::credit_seats(pool, event_id, seats).await {
                Ok(Some(_)) => Err(AllocationError::Database(insert_err)),
                Ok(None) => {
                    tracing::error!(
                        event_id,
                        seats,
                        "compensation found no inventory row; seats debited with no reservation record"
                    );
                    Err(AllocationError::Inconsistent(format!(
                        "{seats} seats debited from missing event {event_id}"
                    )))
                }
                Err(credit_err) => {
                    tracing::error!(
                        event_id,
                        seats,
                        error = %credit_err,
                        "compensating credit failed; seats debited with no reservation record"
                    );
                    Err(AllocationError::Inconsistent(format!(
                        "{seats} seats debited from event {event_id} could not be credited back"
                    )))
                }
            }
        }
    }
}

/// Cancel a confirmed reservation, restoring its seats to the pool.
///
/// Protocol:
/// 1. Look up the entry. Absent: [`AllocationError::NotFound`].
/// 2. Already cancelled: [`AllocationError::AlreadyCancelled`] (idempotent
///    rejection, distinct from the race case so double-cancel bugs upstream
///    stay visible).
/// 3. Guarded transition from confirmed to cancelled. No match means a
///    concurrent request flipped it first:
///    [`AllocationError::AlreadyProcessed`].
/// 4. Credit the seats back. A failure here leaves the entry cancelled with
///    seats unrestored, escalated as [`AllocationError::Inconsistent`] and
///    not retried.
pub async fn cancel(
    pool: &PgPool,
    event_id: &str,
    reservation_id: Uuid,
) -> Result<(Reservation, Event), AllocationError> {
    let existing = ReservationRepo::find_by_reservation_id(pool, reservation_id)
        .await?
        .ok_or(AllocationError::NotFound(reservation_id))?;

    if existing.status == STATUS_CANCELLED {
        return Err(AllocationError::AlreadyCancelled(reservation_id));
    }

    let cancelled = ReservationRepo::cancel_if_confirmed(pool, reservation_id)
        .await?
        .ok_or(AllocationError::AlreadyProcessed(reservation_id))?;

    match EventRepo::credit_seats(pool, event_id, cancelled.seats).await {
        Ok(Some(event)) => Ok((cancelled, event)),
        Ok(None) => {
            tracing::error!(
                %reservation_id,
                event_id,
                seats = cancelled.seats,
                "inventory row missing while crediting cancelled seats"
            );
            Err(AllocationError::Inconsistent(format!(
                "reservation {reservation_id} cancelled but event {event_id} is missing"
            )))
        }
        Err(credit_err) => {
            tracing::error!(
                %reservation_id,
                event_id,
                seats = cancelled.seats,
                error = %credit_err,
                "crediting cancelled seats failed; reservation is cancelled but seats were not restored"
            );
            Err(AllocationError::Inconsistent(format!(
                "reservation {reservation_id} cancelled but {} seats were not restored",
                cancelled.seats
            )))
        }
    }
}
