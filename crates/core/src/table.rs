//! View model for the admin table.

use serde::Serialize;

use crate::pet::Pet;
use crate::types::PetId;

/// One table row. The id rides along so the row's edit/delete actions can
/// target the record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub id: PetId,
    pub name: String,
    pub age: i64,
    pub desc: String,
}

/// The fully rendered table: rows from the derived view, a live count with
/// correct pluralization, and -- when the derived view is empty -- a single
/// explanatory placeholder instead of zero rows.
#[derive(Debug, Clone, Serialize)]
pub struct TableView {
    pub rows: Vec<TableRow>,
    pub count_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

/// `1 animal`, everything else `n animaux` (including zero).
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 animal".to_string()
    } else {
        format!("{count} animaux")
    }
}

/// Materialize the derived view as a table.
pub fn build_table(view: &[Pet]) -> TableView {
    let rows: Vec<TableRow> = view
        .iter()
        .map(|pet| TableRow {
            id: pet.id,
            name: pet.name.clone(),
            age: pet.age,
            desc: pet.desc.clone(),
        })
        .collect();

    let placeholder = if rows.is_empty() {
        Some("Aucun animal trouvé.".to_string())
    } else {
        None
    };

    TableView {
        count_label: count_label(rows.len()),
        rows,
        placeholder,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
