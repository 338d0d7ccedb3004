//! Request handlers.
//!
//! Handlers stay thin: validate input via `ticketboss_core`, delegate to the
//! repositories or the allocation protocol in `ticketboss_db`, and map
//! errors via [`crate::error::AppError`].

pub mod event;
pub mod reservations;
