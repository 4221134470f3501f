//! The pet record store.
//!
//! Every operation is read-all / transform / write-all over the single
//! slot. Last write wins; there is deliberately no locking -- the app is a
//! single-user, single-session tool and the scoping keeps it that way.

use std::path::PathBuf;
use std::sync::Arc;

use pawmatch_core::pet::Pet;
use pawmatch_core::types::PetId;

use crate::error::StoreError;
use crate::slot::{FileSlot, StorageSlot};

/// File name of the collection slot inside the data directory.
pub const SLOT_FILE_NAME: &str = "petDB.json";

/// Record operations over one [`StorageSlot`].
#[derive(Clone)]
pub struct PetStore {
    slot: Arc<dyn StorageSlot>,
}

impl PetStore {
    pub fn new(slot: Arc<dyn StorageSlot>) -> Self {
        Self { slot }
    }

    /// Store backed by a JSON file at `path`.
    pub fn file_backed(path: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileSlot::new(path)))
    }

    /// The full collection.
    ///
    /// Never fails: an absent slot, an unreadable medium, and malformed
    /// contents all yield the empty collection. The anomaly is logged and
    /// otherwise treated as absence.
    pub async fn get_all(&self) -> Vec<Pet> {
        let raw = match self.slot.read().await {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(error = %err, "Storage slot unreadable, treating as empty");
                return Vec::new();
            }
        };

        let Some(raw) = raw else {
            return Vec::new();
        };

        match serde_json::from_str(&raw) {
            Ok(pets) => pets,
            Err(err) => {
                tracing::warn!(error = %err, "Malformed pet collection in slot, treating as empty");
                Vec::new()
            }
        }
    }

    /// Serialize and overwrite the whole collection in one write.
    pub async fn save_all(&self, pets: &[Pet]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(pets)?;
        self.slot.write(&raw).await
    }

    /// Write `defaults` only when the collection is currently empty.
    /// Idempotent. Returns whether a seed happened.
    pub async fn seed_if_empty(&self, defaults: &[Pet]) -> Result<bool, StoreError> {
        if !self.get_all().await.is_empty() {
            return Ok(false);
        }
        self.save_all(defaults).await?;
        tracing::info!(count = defaults.len(), "Seeded pet collection");
        Ok(true)
    }

    /// Append a record. Uniqueness of the id is the caller's concern; the
    /// store stays permissive (seed data, manual inserts).
    pub async fn add(&self, pet: Pet) -> Result<(), StoreError> {
        let mut pets = self.get_all().await;
        pets.push(pet);
        self.save_all(&pets).await
    }

    /// Replace the record with the same id. No-op when the id is absent
    /// (stale edit under the single-session assumption).
    pub async fn update(&self, updated: Pet) -> Result<(), StoreError> {
        let mut pets = self.get_all().await;
        let mut found = false;

        for pet in pets.iter_mut() {
            if pet.id == updated.id {
                *pet = updated.clone();
                found = true;
            }
        }

        if !found {
            tracing::debug!(id = updated.id, "Update target not in store, ignoring");
            return Ok(());
        }
        self.save_all(&pets).await
    }

    /// Remove the record with this id. No-op when absent.
    pub async fn remove(&self, id: PetId) -> Result<(), StoreError> {
        let mut pets = self.get_all().await;
        let before = pets.len();
        pets.retain(|pet| pet.id != id);

        if pets.len() == before {
            tracing::debug!(id, "Delete target not in store, ignoring");
            return Ok(());
        }
        self.save_all(&pets).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
