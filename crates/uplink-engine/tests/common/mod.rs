#![allow(dead_code)]

use rusqlite::Connection;
use tempfile::TempDir;

/// On-disk database with migrations applied; keep the `TempDir` alive.
pub fn setup_db() -> (TempDir, Connection) {
    let dir = TempDir::new().unwrap();
    let mut conn = uplink_store::db::open(dir.path().join("uplink.db")).unwrap();
    uplink_store::migrations::apply_migrations(&mut conn).unwrap();
    (dir, conn)
}

pub fn row_count(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| {
        r.get(0)
    })
    .unwrap()
}
