pub mod admin;
pub mod health;
pub mod swipe;
pub mod view;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /view                    current panel (GET)
/// /view/toggle             switch panel (POST)
///
/// /admin/pets              table view (GET ?search=&age=&sort=)
/// /admin/pets/{id}         delete (DELETE ?confirm=true)
/// /admin/form              form state (GET), submit (POST)
/// /admin/form/edit/{id}    enter edit mode, prefilled (POST)
/// /admin/form/cancel       back to create mode (POST)
///
/// /swipe                   current card or summary (GET)
/// /swipe/drag              live transform for a displacement (POST)
/// /swipe/release           classify a completed gesture (POST)
/// /swipe/like              button decision (POST)
/// /swipe/skip              button decision (POST)
/// /swipe/advance           exit animation finished (POST)
/// /swipe/restart           reset session from the store (POST)
/// /swipe/summary           adopted list (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Panel toggle / bootstrap state.
        .nest("/view", view::router())
        // Admin panel: table, form, per-row actions.
        .nest("/admin", admin::router())
        // Swipe panel: card, gestures, summary.
        .nest("/swipe", swipe::router())
}
