//! HTTP-level integration tests for the swipe panel: card presentation,
//! drag gestures, decisions, the summary, and the panel toggle.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_app_with, build_test_app, get, post_empty, post_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Card presentation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn first_card_is_shown_at_rest() {
    let app = build_test_app().await;
    let response = get(app, "/api/v1/swipe").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["state"], "card");
    assert_eq!(json["data"]["pet"]["name"], "Buddy");
    assert_eq!(json["data"]["position"], 0);
    assert_eq!(json["data"]["total"], 4);
    assert_eq!(json["data"]["transform"]["translate_x"], 0.0);
    assert_eq!(json["data"]["transform"]["rotation"], 0.0);
    assert_eq!(json["data"]["transform"]["opacity"], 1.0);
}

#[tokio::test]
async fn empty_deck_presents_the_summary_immediately() {
    let app = build_app_with(Vec::new()).await;
    let json = body_json(get(app, "/api/v1/swipe").await).await;

    assert_eq!(json["data"]["state"], "summary");
    assert!(json["data"]["adopted"].as_array().unwrap().is_empty());
    assert!(json["data"]["message"].is_string());
}

// ---------------------------------------------------------------------------
// Dragging
// ---------------------------------------------------------------------------

#[tokio::test]
async fn drag_tilts_and_fades_proportionally() {
    let app = build_test_app().await;

    let json = body_json(
        post_json(app.clone(), "/api/v1/swipe/drag", json!({ "delta_x": 150.0 })).await,
    )
    .await;
    assert_eq!(json["data"]["translate_x"], 150.0);
    assert_eq!(json["data"]["rotation"], 15.0);
    assert_eq!(json["data"]["opacity"], 0.5);

    // A drag to the left tilts the other way.
    let json = body_json(
        post_json(app.clone(), "/api/v1/swipe/drag", json!({ "delta_x": -80.0 })).await,
    )
    .await;
    assert_eq!(json["data"]["rotation"], -8.0);

    // The panel state reflects the drag in progress.
    let json = body_json(get(app, "/api/v1/swipe").await).await;
    assert_eq!(json["data"]["transform"]["translate_x"], -80.0);
}

// ---------------------------------------------------------------------------
// Release thresholds
// ---------------------------------------------------------------------------

#[tokio::test]
async fn release_at_99_snaps_back_without_advancing() {
    let app = build_test_app().await;

    post_json(app.clone(), "/api/v1/swipe/drag", json!({ "delta_x": 99.0 })).await;
    let json = body_json(
        post_json(app.clone(), "/api/v1/swipe/release", json!({ "delta_x": 99.0 })).await,
    )
    .await;

    assert_eq!(json["data"]["outcome"], "snap_back");
    assert_eq!(json["data"]["view"]["state"], "card");
    assert_eq!(json["data"]["view"]["pet"]["name"], "Buddy");
    assert_eq!(json["data"]["view"]["transform"]["translate_x"], 0.0);

    let summary = body_json(get(app, "/api/v1/swipe/summary").await).await;
    assert!(summary["data"]["adopted"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn release_at_101_likes_and_appends_the_pet() {
    let app = build_test_app().await;

    post_json(app.clone(), "/api/v1/swipe/drag", json!({ "delta_x": 101.0 })).await;
    let json = body_json(
        post_json(app.clone(), "/api/v1/swipe/release", json!({ "delta_x": 101.0 })).await,
    )
    .await;
    assert_eq!(json["data"]["outcome"], "like");
    assert_eq!(json["data"]["view"]["leaving"], "like");

    // The exit animation finishes; the next card comes up.
    let json = body_json(post_empty(app.clone(), "/api/v1/swipe/advance").await).await;
    assert_eq!(json["data"]["pet"]["name"], "Misty");
    assert_eq!(json["data"]["position"], 1);

    let summary = body_json(get(app, "/api/v1/swipe/summary").await).await;
    let adopted = summary["data"]["adopted"].as_array().unwrap().clone();
    assert_eq!(adopted.len(), 1);
    assert_eq!(adopted[0]["name"], "Buddy");
}

#[tokio::test]
async fn release_at_minus_101_skips_without_appending() {
    let app = build_test_app().await;

    let json = body_json(
        post_json(app.clone(), "/api/v1/swipe/release", json!({ "delta_x": -101.0 })).await,
    )
    .await;
    assert_eq!(json["data"]["outcome"], "skip");

    post_empty(app.clone(), "/api/v1/swipe/advance").await;

    let json = body_json(get(app.clone(), "/api/v1/swipe").await).await;
    assert_eq!(json["data"]["position"], 1);

    let summary = body_json(get(app, "/api/v1/swipe/summary").await).await;
    assert!(summary["data"]["adopted"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Buttons
// ---------------------------------------------------------------------------

#[tokio::test]
async fn like_button_works_without_a_drag() {
    let app = build_test_app().await;

    let json = body_json(post_empty(app.clone(), "/api/v1/swipe/like").await).await;
    assert_eq!(json["data"]["leaving"], "like");

    post_empty(app.clone(), "/api/v1/swipe/advance").await;

    let summary = body_json(get(app, "/api/v1/swipe/summary").await).await;
    assert_eq!(summary["data"]["adopted"][0]["name"], "Buddy");
}

#[tokio::test]
async fn decisions_are_ignored_while_a_card_is_leaving() {
    let app = build_test_app().await;

    post_empty(app.clone(), "/api/v1/swipe/skip").await;
    // A second decision before the exit animation finishes changes nothing.
    post_empty(app.clone(), "/api/v1/swipe/like").await;
    post_empty(app.clone(), "/api/v1/swipe/advance").await;

    let summary = body_json(get(app.clone(), "/api/v1/swipe/summary").await).await;
    assert!(summary["data"]["adopted"].as_array().unwrap().is_empty());

    let json = body_json(get(app, "/api/v1/swipe").await).await;
    assert_eq!(json["data"]["position"], 1);
}

// ---------------------------------------------------------------------------
// Exhaustion, restart, panel toggle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn skipping_the_whole_deck_reaches_the_summary() {
    let app = build_test_app().await;

    for _ in 0..4 {
        post_empty(app.clone(), "/api/v1/swipe/skip").await;
        post_empty(app.clone(), "/api/v1/swipe/advance").await;
    }

    let json = body_json(get(app, "/api/v1/swipe").await).await;
    assert_eq!(json["data"]["state"], "summary");
    assert!(json["data"]["message"].is_string());
}

#[tokio::test]
async fn restart_clears_the_session_and_refetches_the_deck() {
    let app = build_test_app().await;

    post_empty(app.clone(), "/api/v1/swipe/like").await;
    post_empty(app.clone(), "/api/v1/swipe/advance").await;

    let json = body_json(post_empty(app.clone(), "/api/v1/swipe/restart").await).await;
    assert_eq!(json["data"]["state"], "card");
    assert_eq!(json["data"]["pet"]["name"], "Buddy");
    assert_eq!(json["data"]["position"], 0);

    let summary = body_json(get(app, "/api/v1/swipe/summary").await).await;
    assert!(summary["data"]["adopted"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn toggling_back_to_swipe_restarts_the_sequence() {
    let app = build_test_app().await;

    // Make some progress in the swipe session.
    post_empty(app.clone(), "/api/v1/swipe/like").await;
    post_empty(app.clone(), "/api/v1/swipe/advance").await;

    // Swipe -> admin -> swipe.
    let json = body_json(post_empty(app.clone(), "/api/v1/view/toggle").await).await;
    assert_eq!(json["data"]["mode"], "admin");
    let json = body_json(post_empty(app.clone(), "/api/v1/view/toggle").await).await;
    assert_eq!(json["data"]["mode"], "swipe");

    // Switching views restarted the sequence instead of resuming it.
    let json = body_json(get(app.clone(), "/api/v1/swipe").await).await;
    assert_eq!(json["data"]["position"], 0);
    let summary = body_json(get(app, "/api/v1/swipe/summary").await).await;
    assert!(summary["data"]["adopted"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn view_mode_starts_on_the_swipe_panel() {
    let app = build_test_app().await;
    let json = body_json(get(app, "/api/v1/view").await).await;
    assert_eq!(json["data"]["mode"], "swipe");
}
