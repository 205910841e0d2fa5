//! Process configuration and database bootstrap

use rusqlite::Connection;
use std::path::Path;
use uplink_core::errors::{ExError, ExErrorKind};

pub const DEFAULT_DB_PATH: &str = ".uplink/uplink.db";

/// Open the database at `path`, creating its directory and schema if needed
pub fn open_database(path: &Path) -> Result<Connection, ExError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            ExError::new(ExErrorKind::Io)
                .with_op("open_database")
                .with_entity_id(parent.display())
                .with_message(e.to_string())
        })?;
    }

    let mut conn = uplink_store::db::open(path)?;
    uplink_store::migrations::apply_migrations(&mut conn)?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_database_creates_parent_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("uplink.db");

        open_database(&path).unwrap();

        assert!(path.exists());
    }
}
