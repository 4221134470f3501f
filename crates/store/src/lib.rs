//! Persistence for the pet collection.
//!
//! The whole collection lives as one serialized JSON blob under a single
//! named slot -- [`slot::StorageSlot`] abstracts the medium (a file on disk
//! in production, memory in tests) and [`pets::PetStore`] layers the
//! read-all/transform/write-all record operations on top. Collection sizes
//! are tens of records, so nothing here is optimized for partial updates.

pub mod error;
pub mod pets;
pub mod slot;

pub use error::StoreError;
pub use pets::{PetStore, SLOT_FILE_NAME};
pub use slot::{FileSlot, MemorySlot, StorageSlot};
