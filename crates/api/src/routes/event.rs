//! Route definitions for the `/event` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::event;
use crate::state::AppState;

/// Routes mounted at `/event`.
///
/// ```text
/// GET    /                -> summary
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(event::summary))
}
