//! Route definitions for the admin panel.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Admin panel routes mounted at `/admin`.
///
/// ```text
/// GET    /pets            -> list_pets (derived table view)
/// DELETE /pets/{id}       -> delete_pet (?confirm=true)
/// GET    /form            -> form_state
/// POST   /form            -> submit_form
/// POST   /form/edit/{id}  -> edit_form
/// POST   /form/cancel     -> cancel_form
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pets", get(admin::list_pets))
        .route("/pets/{id}", delete(admin::delete_pet))
        .route("/form", get(admin::form_state).post(admin::submit_form))
        .route("/form/edit/{id}", post(admin::edit_form))
        .route("/form/cancel", post(admin::cancel_form))
}
