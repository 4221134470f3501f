//! Form validation and the create/edit form controller.
//!
//! The form accepts raw string input for every field and reports all field
//! failures together -- never just the first. On success the controller
//! builds a record from trimmed values and tells the caller whether to add
//! or update, then resets itself to create mode.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;
use crate::pet::{fresh_id, Pet};
use crate::types::PetId;

// ---------------------------------------------------------------------------
// Field bounds
// ---------------------------------------------------------------------------

/// Accepted age range. Name (2-30 chars), image (well-formed URL), and
/// description (5-100 chars) bounds live in the `#[validate]` attributes.
pub const AGE_MIN: i64 = 1;
pub const AGE_MAX: i64 = 20;

/// Reporting order for field errors. `ValidationErrors` is map-backed;
/// iterating in declaration order keeps responses deterministic.
const FIELD_ORDER: [&str; 4] = ["name", "age", "img", "desc"];

// ---------------------------------------------------------------------------
// Draft + validation
// ---------------------------------------------------------------------------

/// Raw form input. `age` stays a string here: it is user keyboard input,
/// and "not a number" must surface as a field error, not a decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PetDraft {
    #[validate(length(
        min = 2,
        max = 30,
        message = "Le nom doit faire entre 2 et 30 caractères"
    ))]
    pub name: String,

    #[validate(custom(function = validate_age))]
    pub age: String,

    #[validate(url(message = "L'image doit être une URL valide"))]
    pub img: String,

    #[validate(length(
        min = 5,
        max = 100,
        message = "La description doit faire entre 5 et 100 caractères"
    ))]
    pub desc: String,
}

fn validate_age(value: &str) -> Result<(), ValidationError> {
    let in_range = value
        .trim()
        .parse::<i64>()
        .map(|n| (AGE_MIN..=AGE_MAX).contains(&n))
        .unwrap_or(false);

    if in_range {
        Ok(())
    } else {
        let mut err = ValidationError::new("age");
        err.message = Some("L'âge doit être un entier entre 1 et 20".into());
        Err(err)
    }
}

/// One field's validation failure, as reported to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Validate a draft, returning every offending field with its message.
/// An empty vec means the draft is submittable.
pub fn validate_draft(draft: &PetDraft) -> Vec<FieldError> {
    match draft.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => collect_field_errors(&errors),
    }
}

fn collect_field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let by_field = errors.field_errors();
    let mut out = Vec::new();

    for field in FIELD_ORDER {
        if let Some(list) = by_field.get(field) {
            for err in list.iter() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Valeur invalide pour le champ {field}"));
                out.push(FieldError {
                    field: field.to_string(),
                    message,
                });
            }
        }
    }

    out
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// Which record a submission targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(PetId),
}

/// What a successful submission asks the store to do.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAction {
    Created(Pet),
    Updated(Pet),
}

/// Serializable snapshot of the form's current state.
#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub mode: &'static str,
    pub id: Option<PetId>,
    pub fields: PetDraft,
}

/// The create/edit form, one per admin session.
#[derive(Debug, Clone)]
pub struct FormController {
    mode: FormMode,
    fields: PetDraft,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    pub fn new() -> Self {
        Self {
            mode: FormMode::Create,
            fields: PetDraft::default(),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Switch to edit mode, prefilled with the record's current values.
    pub fn begin_edit(&mut self, pet: &Pet) {
        self.mode = FormMode::Edit(pet.id);
        self.fields = PetDraft {
            name: pet.name.clone(),
            age: pet.age.to_string(),
            img: pet.img.clone(),
            desc: pet.desc.clone(),
        };
    }

    /// Discard edits and revert to create mode. Never touches the store.
    pub fn cancel(&mut self) {
        *self = Self::new();
    }

    pub fn view(&self) -> FormView {
        let (mode, id) = match self.mode {
            FormMode::Create => ("create", None),
            FormMode::Edit(id) => ("edit", Some(id)),
        };
        FormView {
            mode,
            id,
            fields: self.fields.clone(),
        }
    }

    /// Validate and submit a draft.
    ///
    /// On failure the draft is kept in the form (so the client can re-render
    /// it) and every field error is returned. On success the built record is
    /// handed back for the store to add or update, and the form resets to
    /// create mode. `existing` is consulted to keep freshly generated ids
    /// unique.
    pub fn submit(&mut self, draft: PetDraft, existing: &[Pet]) -> Result<SubmitAction, CoreError> {
        let errors = validate_draft(&draft);
        if !errors.is_empty() {
            self.fields = draft;
            return Err(CoreError::Form(errors));
        }

        let age: i64 = draft
            .age
            .trim()
            .parse()
            .map_err(|_| CoreError::Validation("L'âge doit être un entier".to_string()))?;

        let id = match self.mode {
            FormMode::Edit(id) => id,
            FormMode::Create => fresh_id(existing),
        };

        let pet = Pet {
            id,
            name: draft.name.trim().to_string(),
            age,
            img: draft.img.trim().to_string(),
            desc: draft.desc.trim().to_string(),
        };

        let action = match self.mode {
            FormMode::Edit(_) => SubmitAction::Updated(pet),
            FormMode::Create => SubmitAction::Created(pet),
        };

        *self = Self::new();
        Ok(action)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
