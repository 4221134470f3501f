//! Handlers for the panel toggle.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::{AppState, ViewMode};

#[derive(Debug, Serialize)]
pub struct ViewState {
    pub mode: ViewMode,
}

/// GET /api/v1/view
///
/// Which panel is currently showing.
pub async fn current_view(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mode = *state.view_mode.read().await;
    Ok(Json(DataResponse {
        data: ViewState { mode },
    }))
}

/// POST /api/v1/view/toggle
///
/// Switch panels. Entering the swipe panel always restarts the session
/// from the live store (index 0, empty adopted list) -- switching never
/// resumes a previous swipe-through. The admin panel needs no reset here;
/// its table re-reads the store on every request.
pub async fn toggle_view(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut mode = state.view_mode.write().await;
    *mode = match *mode {
        ViewMode::Swipe => ViewMode::Admin,
        ViewMode::Admin => ViewMode::Swipe,
    };

    if *mode == ViewMode::Swipe {
        let deck = state.store.get_all().await;
        state.swipe.write().await.restart(deck);
    }

    tracing::info!(mode = ?*mode, "Panel switched");

    Ok(Json(DataResponse {
        data: ViewState { mode: *mode },
    }))
}
