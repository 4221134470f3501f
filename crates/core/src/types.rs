/// Pet identifiers are millisecond timestamps taken at creation time.
pub type PetId = i64;
