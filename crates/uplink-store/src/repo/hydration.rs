//! Hydration layer - loads the catalog from SQLite into a `Store`
//!
//! Rows are loaded in id order and every template row is re-validated, so a
//! hand-edited database fails loudly instead of yielding a broken `Store`.

#![allow(clippy::result_large_err)]

use crate::errors::Result;
use crate::repo::SqliteRepo;
use rusqlite::Connection;
use uplink_core::Store;

/// Load every template and instance into a fresh `Store`
///
/// The store's id sequences are raised to SQLite's AUTOINCREMENT high-water
/// marks so ids of deleted rows are never handed out again.
///
/// # Errors
///
/// Returns `StoreFailure` if a query fails or a row violates a domain rule.
pub fn load_store(conn: &Connection) -> Result<Store> {
    let mut store = Store::new();

    for template in SqliteRepo::list_templates(conn)? {
        store.insert_template(template);
    }
    for instance in SqliteRepo::list_instances(conn)? {
        store.insert_instance(instance);
    }

    store.restore_sequences(
        SqliteRepo::sequence(conn, "command_templates")?,
        SqliteRepo::sequence(conn, "command_instances")?,
    );

    tracing::trace!(
        templates = store.list_templates().len(),
        instances = store.list_instances().len(),
        "store hydrated"
    );

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db, migrations};

    #[test]
    fn test_empty_database_hydrates_empty_store() {
        let mut conn = db::open_in_memory().unwrap();
        migrations::apply_migrations(&mut conn).unwrap();

        let store = load_store(&conn).unwrap();
        assert!(store.list_templates().is_empty());
        assert_eq!(store.next_template_id(), 1);
        assert_eq!(store.next_instance_id(), 1);
    }
}
