//! Route definitions for the swipe panel.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::swipe;
use crate::state::AppState;

/// Swipe panel routes mounted at `/swipe`.
///
/// ```text
/// GET  /          -> swipe_state (current card or summary)
/// POST /drag      -> drag (pointer moved)
/// POST /release   -> release (gesture ended)
/// POST /like      -> like button
/// POST /skip      -> skip button
/// POST /advance   -> advance (exit animation finished)
/// POST /restart   -> restart (fresh deck from the store)
/// GET  /summary   -> summary (adopted list)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(swipe::swipe_state))
        .route("/drag", post(swipe::drag))
        .route("/release", post(swipe::release))
        .route("/like", post(swipe::like))
        .route("/skip", post(swipe::skip))
        .route("/advance", post(swipe::advance))
        .route("/restart", post(swipe::restart))
        .route("/summary", get(swipe::summary))
}
