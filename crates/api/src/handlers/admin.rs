//! Handlers for the admin panel: the filtered/sorted table and the
//! create/edit form.
//!
//! The table is re-derived from the live store on every request -- entering
//! the panel, changing a filter, and finishing any mutation all land here,
//! so the admin view is never served from a stale snapshot.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use pawmatch_core::error::CoreError;
use pawmatch_core::filter::{derive_view, AgeFilter, FilterConfig, SortOrder};
use pawmatch_core::form::{PetDraft, SubmitAction};
use pawmatch_core::table::build_table;
use pawmatch_core::types::PetId;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// Filter/sort selectors as they arrive on the query string.
#[derive(Debug, Deserialize)]
pub struct TableParams {
    pub search: Option<String>,
    pub age: Option<String>,
    pub sort: Option<String>,
}

impl TableParams {
    fn into_config(self) -> Result<FilterConfig, CoreError> {
        let age = AgeFilter::parse(self.age.as_deref().unwrap_or(""))?;
        let sort = match self.sort.as_deref() {
            None | Some("") => SortOrder::default(),
            Some(value) => SortOrder::parse(value)?,
        };
        Ok(FilterConfig {
            search: self.search.unwrap_or_default(),
            age,
            sort,
        })
    }
}

/// GET /api/v1/admin/pets
///
/// Render the admin table: re-read the store, derive the filtered/sorted
/// view, and materialize rows plus the live count.
pub async fn list_pets(
    State(state): State<AppState>,
    Query(params): Query<TableParams>,
) -> AppResult<impl IntoResponse> {
    let config = params.into_config()?;
    let all = state.store.get_all().await;
    let table = build_table(&derive_view(&all, &config));

    Ok(Json(DataResponse { data: table }))
}

// ---------------------------------------------------------------------------
// Row actions
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    /// The client's confirmation dialog outcome. Declined -> no-op.
    #[serde(default)]
    pub confirm: bool,
}

/// DELETE /api/v1/admin/pets/{id}
///
/// Remove a record, but only once the user confirmed. A declined
/// confirmation and an unknown id are both silent no-ops.
pub async fn delete_pet(
    State(state): State<AppState>,
    Path(pet_id): Path<PetId>,
    Query(params): Query<DeleteParams>,
) -> AppResult<impl IntoResponse> {
    if !params.confirm {
        tracing::debug!(pet_id, "Delete not confirmed, ignoring");
        return Ok(StatusCode::NO_CONTENT);
    }

    state.store.remove(pet_id).await?;
    tracing::info!(pet_id, "Pet deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/form
///
/// The form's current state: mode (create/edit) and field contents.
pub async fn form_state(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let form = state.form.read().await;
    Ok(Json(DataResponse { data: form.view() }))
}

/// POST /api/v1/admin/form/edit/{id}
///
/// Hand the record's current values to the form and switch it to edit
/// mode. A stale id leaves the form untouched.
pub async fn edit_form(
    State(state): State<AppState>,
    Path(pet_id): Path<PetId>,
) -> AppResult<impl IntoResponse> {
    let all = state.store.get_all().await;
    let mut form = state.form.write().await;

    match all.iter().find(|p| p.id == pet_id) {
        Some(pet) => form.begin_edit(pet),
        None => tracing::debug!(pet_id, "Edit target not in store, ignoring"),
    }

    Ok(Json(DataResponse { data: form.view() }))
}

/// POST /api/v1/admin/form/cancel
///
/// Discard edits and revert to create mode. Never touches the store.
pub async fn cancel_form(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut form = state.form.write().await;
    form.cancel();
    Ok(Json(DataResponse { data: form.view() }))
}

/// POST /api/v1/admin/form
///
/// Submit the form. Create mode adds with a fresh id; edit mode replaces
/// the record with the matching id (a stale id no-ops in the store). All
/// field failures come back together as 422.
pub async fn submit_form(
    State(state): State<AppState>,
    Json(draft): Json<PetDraft>,
) -> AppResult<impl IntoResponse> {
    let existing = state.store.get_all().await;
    let action = state.form.write().await.submit(draft, &existing)?;

    match action {
        SubmitAction::Created(pet) => {
            state.store.add(pet.clone()).await?;
            tracing::info!(pet_id = pet.id, name = %pet.name, "Pet created");
            Ok((StatusCode::CREATED, Json(DataResponse { data: pet })))
        }
        SubmitAction::Updated(pet) => {
            state.store.update(pet.clone()).await?;
            tracing::info!(pet_id = pet.id, name = %pet.name, "Pet updated");
            Ok((StatusCode::OK, Json(DataResponse { data: pet })))
        }
    }
}
