use crate::db::migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "pomoplanner.db";

/// A scoped handle on the planner database.
///
/// Each store struct opens its own `Db` and releases the connection when it
/// goes out of scope. Opening ensures the schema exists and the default
/// settings have been seeded, so every caller sees a usable database or a
/// propagated fatal error.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let mut conn = Connection::open(db_file_path)?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        migrations::init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }
}
