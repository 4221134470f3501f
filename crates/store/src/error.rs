/// Errors surfaced by the write side of the store.
///
/// Reads never error: absent, unreadable, or malformed slot contents all
/// degrade to the empty collection (logged, not surfaced).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize pet collection: {0}")]
    Serialize(#[from] serde_json::Error),
}
