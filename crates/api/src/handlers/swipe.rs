//! Handlers for the swipe panel.
//!
//! Each handler is one user gesture: pointer movement, gesture end, the
//! like/skip buttons, the exit-animation-finished event, and restart.
//! Mouse and touch drags both arrive as the same `delta_x` payload.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use pawmatch_core::swipe::{CardTransform, Decision, ReleaseOutcome, SwipeView};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Final (or current) horizontal displacement of a drag, in pixels.
#[derive(Debug, Deserialize)]
pub struct DragInput {
    pub delta_x: f64,
}

/// Outcome of a completed gesture, plus the panel state after it.
#[derive(Debug, Serialize)]
pub struct ReleaseView {
    pub outcome: ReleaseOutcome,
    pub view: SwipeView,
}

/// GET /api/v1/swipe
///
/// The current card (with its live transform) or, once the deck is
/// exhausted, the summary.
pub async fn swipe_state(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let session = state.swipe.read().await;
    Ok(Json(DataResponse {
        data: session.view(),
    }))
}

/// POST /api/v1/swipe/drag
///
/// Pointer moved mid-gesture. Returns the card's transform (tilt and fade
/// follow displacement continuously). With no card to drag this is a
/// no-op reporting the at-rest transform.
pub async fn drag(
    State(state): State<AppState>,
    Json(input): Json<DragInput>,
) -> AppResult<impl IntoResponse> {
    let mut session = state.swipe.write().await;
    let transform = session
        .drag(input.delta_x)
        .unwrap_or_else(CardTransform::rest);

    Ok(Json(DataResponse { data: transform }))
}

/// POST /api/v1/swipe/release
///
/// Gesture ended: past the positive threshold -> like, past the negative ->
/// skip, otherwise the card snaps back with no index change.
pub async fn release(
    State(state): State<AppState>,
    Json(input): Json<DragInput>,
) -> AppResult<impl IntoResponse> {
    let mut session = state.swipe.write().await;
    let outcome = session
        .release(input.delta_x)
        .unwrap_or(ReleaseOutcome::SnapBack);

    tracing::debug!(delta_x = input.delta_x, ?outcome, "Gesture released");

    Ok(Json(DataResponse {
        data: ReleaseView {
            outcome,
            view: session.view(),
        },
    }))
}

/// POST /api/v1/swipe/like
///
/// Button decision: adopt the current card.
pub async fn like(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut session = state.swipe.write().await;
    if session.decide(Decision::Like) {
        tracing::info!(index = session.index(), "Card liked");
    }
    Ok(Json(DataResponse {
        data: session.view(),
    }))
}

/// POST /api/v1/swipe/skip
///
/// Button decision: pass on the current card.
pub async fn skip(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut session = state.swipe.write().await;
    if session.decide(Decision::Skip) {
        tracing::info!(index = session.index(), "Card skipped");
    }
    Ok(Json(DataResponse {
        data: session.view(),
    }))
}

/// POST /api/v1/swipe/advance
///
/// The card's exit animation finished; show the next card (or the summary
/// when the deck is exhausted). A no-op unless a decision is pending.
pub async fn advance(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut session = state.swipe.write().await;
    session.advance();
    Ok(Json(DataResponse {
        data: session.view(),
    }))
}

/// POST /api/v1/swipe/restart
///
/// Clear the adopted list, re-fetch the deck from the store, and start
/// over at the first card.
pub async fn restart(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let deck = state.store.get_all().await;
    let mut session = state.swipe.write().await;
    session.restart(deck);

    tracing::info!(deck_len = session.deck_len(), "Swipe session restarted");

    Ok(Json(DataResponse {
        data: session.view(),
    }))
}

/// GET /api/v1/swipe/summary
///
/// The adopted list in accumulation order, with an explanatory message
/// when nothing was adopted.
pub async fn summary(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let session = state.swipe.read().await;
    Ok(Json(DataResponse {
        data: session.summary(),
    }))
}
