//! Per-table repositories. Each repository is a unit struct of static async
//! methods taking an explicit `&PgPool` handle; ownership of the pool and
//! its lifecycle belongs to the caller (see `main.rs`).

pub mod event_repo;
pub mod reservation_repo;

pub use event_repo::EventRepo;
pub use reservation_repo::ReservationRepo;
