//! Embedded SQL migrations
//!
//! Migrations are compiled in with `include_str!` and applied in list order.

/// One forward-only migration
pub struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
}

/// All embedded migrations, oldest first
pub fn get_migrations() -> Vec<Migration> {
    vec![Migration {
        id: "001_initial_schema",
        sql: include_str!("../../migrations/001_initial_schema.sql"),
    }]
}
