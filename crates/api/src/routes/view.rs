//! Route definitions for the panel toggle.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::view;
use crate::state::AppState;

/// Panel toggle routes mounted at `/view`.
///
/// ```text
/// GET  /        -> current_view
/// POST /toggle  -> toggle_view
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(view::current_view))
        .route("/toggle", post(view::toggle_view))
}
