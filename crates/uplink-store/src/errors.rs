//! Error helpers for uplink-store
//!
//! Every persistence failure surfaces as an `ExError` of kind `StoreFailure`
//! that keeps the underlying cause in its message.

use uplink_core::errors::{CatalogError, ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// A migration's SQL failed to apply
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::StoreFailure)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// An applied migration no longer matches the embedded SQL
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::ConstraintViolation)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: recorded {}, embedded {}",
            migration_id, expected, actual
        ))
}

/// The database records a migration this build does not know about
pub fn unknown_migration(migration_id: &str) -> ExError {
    ExError::new(ExErrorKind::ConstraintViolation)
        .with_op("migration")
        .with_message(format!(
            "Database has migration {} which this build does not embed",
            migration_id
        ))
}

/// Wrap a rusqlite error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::StoreFailure)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// A stored row no longer satisfies a domain rule
pub fn corrupt_row(table: &str, id: i64, err: CatalogError) -> ExError {
    ExError::new(ExErrorKind::StoreFailure)
        .with_op("hydrate")
        .with_entity_id(id)
        .with_message(format!("Row in {} is invalid: {}", table, err))
}
