//! Database schema migration management.
//!
//! Applies versioned schema changes on startup and records them in a
//! `migrations` tracking table, so `Db::new` is idempotent: the first open
//! creates the tables and seeds the default settings, later opens are
//! no-ops.

use crate::db::settings::DEFAULT_SETTINGS;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// A single migration: a version, a descriptive name, and the schema
/// transformation applied within a transaction.
#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all migrations in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: base tables. The settings seed lives in the same
        // migration so it runs exactly once per database, matching the
        // on-first-creation contract.
        self.add_migration(1, "create_tables_and_seed_settings", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS profiles (
        id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        password TEXT,
        is_selected INTEGER NOT NULL DEFAULT 0
    )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS tasks (
        id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
        profile_id INTEGER NOT NULL,
        date TEXT NOT NULL,
        priority TEXT NOT NULL DEFAULT 'Low',
        is_completed INTEGER NOT NULL DEFAULT 0,
        category TEXT,
        details TEXT NOT NULL,
        FOREIGN KEY (profile_id) REFERENCES profiles(id) ON DELETE CASCADE
    )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS settings (
        description TEXT NOT NULL UNIQUE,
        value TEXT NOT NULL
    )",
                [],
            )?;

            for (description, value) in DEFAULT_SETTINGS {
                tx.execute(
                    "INSERT OR IGNORE INTO settings (description, value) VALUES (?1, ?2)",
                    params![description, value],
                )?;
            }

            Ok(())
        });

        // Version 2: indices for the task listing queries (profile + date).
        self.add_migration(2, "add_task_indices", |tx| {
            tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_profile_date ON tasks(profile_id, date)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_profiles_selected ON profiles(is_selected)", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies all pending migrations in order, each recorded in the
    /// tracking table after it succeeds. The batch runs inside a single
    /// transaction so a failed migration leaves no partial state.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!(Message::AllMigrationsCompleted);
            return Ok(());
        }

        msg_debug!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;

        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

            match (migration.up)(&tx) {
                Ok(()) => {
                    tx.execute(
                        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                        params![migration.version, migration.name],
                    )?;
                    msg_debug!(Message::MigrationCompleted(migration.version));
                }
                Err(e) => {
                    msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e);
                }
            }
        }

        tx.commit()?;
        msg_debug!(Message::AllMigrationsCompleted);

        Ok(())
    }

    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0)).unwrap_or(Some(0));

        Ok(version.unwrap_or(0))
    }

    /// Complete migration history as (version, name, applied_at) tuples.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Ensures the connection's schema is current.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    let manager = MigrationManager::new();
    manager.run_migrations(conn)?;
    Ok(())
}

/// Current schema version, 0 for an empty database.
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    let manager = MigrationManager::new();
    manager.get_current_version(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_apply_once_and_record_history() {
        let mut conn = Connection::open_in_memory().unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 0);

        init_with_migrations(&mut conn).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 2);

        let manager = MigrationManager::new();
        let history = manager.get_migration_history(&conn).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].0, 1);
        assert_eq!(history[0].1, "create_tables_and_seed_settings");
        assert_eq!(history[1].0, 2);
        assert_eq!(history[1].1, "add_task_indices");

        // Re-running is a no-op.
        init_with_migrations(&mut conn).unwrap();
        assert_eq!(manager.get_migration_history(&conn).unwrap().len(), 2);
    }

    #[test]
    fn first_migration_seeds_default_settings() {
        let mut conn = Connection::open_in_memory().unwrap();
        init_with_migrations(&mut conn).unwrap();

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM settings", [], |row| row.get(0)).unwrap();
        assert_eq!(count, DEFAULT_SETTINGS.len() as i64);

        // Seeding never overwrites existing values.
        conn.execute("UPDATE settings SET value = '60' WHERE description = ?1", params![DEFAULT_SETTINGS[0].0])
            .unwrap();
        init_with_migrations(&mut conn).unwrap();
        let value: String = conn
            .query_row("SELECT value FROM settings WHERE description = ?1", params![DEFAULT_SETTINGS[0].0], |row| row.get(0))
            .unwrap();
        assert_eq!(value, "60");
    }
}
