//! SQLite repository for command templates and instances
//!
//! Every function takes a `&Connection`; a `rusqlite::Transaction` derefs to
//! one, so the engine passes its open transaction and commits once.

#![allow(clippy::result_large_err)]

use crate::errors::{corrupt_row, from_rusqlite, Result};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Row};
use uplink_core::model::{CommandInstance, CommandStatus, CommandTemplate};

const TEMPLATE_COLUMNS: &str = "id, name, params, format, data_size, total_size";
const INSTANCE_COLUMNS: &str = "id, command_type, status, params, created_on, updated_on";

/// Raw template row, validated on conversion
struct TemplateRow {
    id: i64,
    name: String,
    params: Option<String>,
    format: Option<String>,
    data_size: u32,
    total_size: u32,
}

impl TemplateRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            params: row.get(2)?,
            format: row.get(3)?,
            data_size: row.get(4)?,
            total_size: row.get(5)?,
        })
    }

    fn into_template(self) -> Result<CommandTemplate> {
        let id = self.id;
        CommandTemplate::new(
            id,
            self.name,
            self.params,
            self.format,
            self.data_size,
            self.total_size,
        )
        .map_err(|e| corrupt_row("command_templates", id, e))
    }
}

/// Raw instance row, status parsed on conversion
struct InstanceRow {
    id: i64,
    template_id: i64,
    status: String,
    params: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl InstanceRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            template_id: row.get(1)?,
            status: row.get(2)?,
            params: row.get(3)?,
            created_at: row.get(4)?,
            updated_at: row.get(5)?,
        })
    }

    fn into_instance(self) -> Result<CommandInstance> {
        let status: CommandStatus = self
            .status
            .parse()
            .map_err(|e| corrupt_row("command_instances", self.id, e))?;
        Ok(CommandInstance::restore(
            self.id,
            self.template_id,
            status,
            self.params,
            self.created_at,
            self.updated_at,
        ))
    }
}

/// SQLite repository for templates and instances
pub struct SqliteRepo;

impl SqliteRepo {
    /// Insert a template row with its already-assigned id
    pub fn insert_template(conn: &Connection, template: &CommandTemplate) -> Result<()> {
        conn.execute(
            "INSERT INTO command_templates (id, name, params, format, data_size, total_size)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                template.id(),
                template.name(),
                template.params(),
                template.format(),
                template.data_size(),
                template.total_size(),
            ],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Get a template by id
    pub fn get_template(conn: &Connection, id: i64) -> Result<Option<CommandTemplate>> {
        let row = conn
            .query_row(
                &format!("SELECT {TEMPLATE_COLUMNS} FROM command_templates WHERE id = ?"),
                [id],
                TemplateRow::from_row,
            )
            .optional()
            .map_err(from_rusqlite)?;

        row.map(TemplateRow::into_template).transpose()
    }

    /// List all templates in id order
    pub fn list_templates(conn: &Connection) -> Result<Vec<CommandTemplate>> {
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {TEMPLATE_COLUMNS} FROM command_templates ORDER BY id"
            ))
            .map_err(from_rusqlite)?;

        let rows = stmt
            .query_map([], TemplateRow::from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        rows.into_iter().map(TemplateRow::into_template).collect()
    }

    /// Delete a template row, returning whether one was removed
    pub fn delete_template(conn: &Connection, id: i64) -> Result<bool> {
        let affected = conn
            .execute("DELETE FROM command_templates WHERE id = ?", [id])
            .map_err(from_rusqlite)?;
        Ok(affected > 0)
    }

    /// Insert an instance row with its already-assigned id
    pub fn insert_instance(conn: &Connection, instance: &CommandInstance) -> Result<()> {
        conn.execute(
            "INSERT INTO command_instances (id, command_type, status, params, created_on, updated_on)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                instance.id(),
                instance.template_id(),
                instance.status().as_str(),
                instance.params(),
                instance.created_at(),
                instance.updated_at(),
            ],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Write an instance's status and `updated_on`
    ///
    /// The other columns are immutable after creation.
    pub fn update_instance_status(conn: &Connection, instance: &CommandInstance) -> Result<()> {
        conn.execute(
            "UPDATE command_instances SET status = ?1, updated_on = ?2 WHERE id = ?3",
            rusqlite::params![
                instance.status().as_str(),
                instance.updated_at(),
                instance.id()
            ],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Get an instance by id
    pub fn get_instance(conn: &Connection, id: i64) -> Result<Option<CommandInstance>> {
        let row = conn
            .query_row(
                &format!("SELECT {INSTANCE_COLUMNS} FROM command_instances WHERE id = ?"),
                [id],
                InstanceRow::from_row,
            )
            .optional()
            .map_err(from_rusqlite)?;

        row.map(InstanceRow::into_instance).transpose()
    }

    /// List all instances in id order
    pub fn list_instances(conn: &Connection) -> Result<Vec<CommandInstance>> {
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {INSTANCE_COLUMNS} FROM command_instances ORDER BY id"
            ))
            .map_err(from_rusqlite)?;

        let rows = stmt
            .query_map([], InstanceRow::from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        rows.into_iter().map(InstanceRow::into_instance).collect()
    }

    /// Delete an instance row, returning whether one was removed
    pub fn delete_instance(conn: &Connection, id: i64) -> Result<bool> {
        let affected = conn
            .execute("DELETE FROM command_instances WHERE id = ?", [id])
            .map_err(from_rusqlite)?;
        Ok(affected > 0)
    }

    /// Highest id ever handed out for `table` (0 if none)
    ///
    /// Reads SQLite's AUTOINCREMENT bookkeeping, which survives deletes.
    pub fn sequence(conn: &Connection, table: &str) -> Result<i64> {
        let seq: Option<i64> = conn
            .query_row(
                "SELECT seq FROM sqlite_sequence WHERE name = ?",
                [table],
                |row| row.get(0),
            )
            .optional()
            .map_err(from_rusqlite)?;
        Ok(seq.unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db, migrations};

    fn setup() -> Connection {
        let mut conn = db::open_in_memory().unwrap();
        migrations::apply_migrations(&mut conn).unwrap();
        conn
    }

    fn ping() -> CommandTemplate {
        CommandTemplate::new(1, "PING".into(), Some("freq".into()), Some("int".into()), 4, 8)
            .unwrap()
    }

    #[test]
    fn test_template_round_trip() {
        let conn = setup();
        SqliteRepo::insert_template(&conn, &ping()).unwrap();

        assert_eq!(SqliteRepo::get_template(&conn, 1).unwrap(), Some(ping()));
        assert_eq!(SqliteRepo::get_template(&conn, 2).unwrap(), None);
    }

    #[test]
    fn test_instance_round_trip_keeps_timestamps() {
        let conn = setup();
        SqliteRepo::insert_template(&conn, &ping()).unwrap();
        let instance = CommandInstance::new(1, 1, Some("433".into()));
        SqliteRepo::insert_instance(&conn, &instance).unwrap();

        let loaded = SqliteRepo::get_instance(&conn, 1).unwrap().unwrap();
        assert_eq!(loaded, instance);
    }

    #[test]
    fn test_instance_requires_existing_template() {
        let conn = setup();
        let instance = CommandInstance::new(1, 42, None);
        let err = SqliteRepo::insert_instance(&conn, &instance).unwrap_err();
        assert_eq!(err.kind(), uplink_core::ExErrorKind::StoreFailure);
    }

    #[test]
    fn test_sequence_survives_delete() {
        let conn = setup();
        SqliteRepo::insert_template(&conn, &ping()).unwrap();
        assert!(SqliteRepo::delete_template(&conn, 1).unwrap());

        assert_eq!(SqliteRepo::sequence(&conn, "command_templates").unwrap(), 1);
        assert_eq!(SqliteRepo::sequence(&conn, "command_instances").unwrap(), 0);
    }
}
