use crate::form::FieldError;

/// Domain-level error type shared across the workspace.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A request value failed a single-value check (bad sort key, bad age
    /// filter, and so on).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A form submission failed one or more field checks. All offending
    /// fields are reported together, never just the first.
    #[error("Form validation failed ({} field(s))", .0.len())]
    Form(Vec<FieldError>),
}
