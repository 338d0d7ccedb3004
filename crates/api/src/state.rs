use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// There is intentionally no in-process cache or lock for seat counts: all
/// inventory coordination happens in the store.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: ticketboss_db::DbPool,
    /// Server configuration (event identity, seat cap, timeouts).
    pub config: Arc<ServerConfig>,
}
