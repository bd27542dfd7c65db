use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::profile::Profile;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

const INSERT_PROFILE: &str = "INSERT INTO profiles (username, password) VALUES (?1, ?2)";
const UPDATE_PROFILE: &str = "UPDATE profiles SET username = ?2, password = ?3, is_selected = ?4 WHERE id = ?1";
const DELETE_PROFILE: &str = "DELETE FROM profiles WHERE id = ?1";
const SELECT_ALL_PROFILES: &str = "SELECT id, username, password, is_selected FROM profiles";
const SELECT_PROFILE_BY_ID: &str = "SELECT id, username, password, is_selected FROM profiles WHERE id = ?1";
const SELECT_PROFILE_BY_USERNAME: &str = "SELECT id, username, password, is_selected FROM profiles WHERE username = ?1";
const SELECT_SELECTED_PROFILE: &str = "SELECT id, username, password, is_selected FROM profiles WHERE is_selected = 1";
const CLEAR_SELECTED: &str = "UPDATE profiles SET is_selected = 0 WHERE is_selected = 1";
const SET_SELECTED: &str = "UPDATE profiles SET is_selected = 1 WHERE id = ?1";

/// Profile store. Opens its own connection and releases it on drop.
pub struct Profiles {
    conn: Connection,
}

impl Profiles {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Inserts a new profile and returns its id.
    ///
    /// The UNIQUE constraint on the username is authoritative: a conflicting
    /// insert comes back as the duplicate-username message, a recoverable
    /// outcome for the caller to display.
    pub fn add(&mut self, username: &str, password_digest: Option<&str>) -> Result<i64> {
        match self.conn.execute(INSERT_PROFILE, params![username, password_digest]) {
            Ok(_) => Ok(self.conn.last_insert_rowid()),
            Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == rusqlite::ErrorCode::ConstraintViolation => {
                Err(msg_error_anyhow!(Message::UsernameTaken))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Updates a profile by id. Returns `true` iff exactly one row changed;
    /// `false` is the caller-visible "not found" outcome.
    pub fn update(&mut self, profile: &Profile) -> Result<bool> {
        let Some(id) = profile.id else {
            return Ok(false);
        };
        let affected = self
            .conn
            .execute(UPDATE_PROFILE, params![id, profile.username, profile.password, profile.is_selected])?;
        Ok(affected == 1)
    }

    /// Deletes a profile by id; its tasks go with it via the foreign key.
    pub fn delete(&mut self, id: i64) -> Result<bool> {
        let affected = self.conn.execute(DELETE_PROFILE, params![id])?;
        Ok(affected == 1)
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Profile>> {
        self.conn
            .query_row(SELECT_PROFILE_BY_ID, params![id], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    pub fn get_by_username(&mut self, username: &str) -> Result<Option<Profile>> {
        self.conn
            .query_row(SELECT_PROFILE_BY_USERNAME, params![username], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    /// The currently selected profile, if any.
    pub fn get_selected(&mut self) -> Result<Option<Profile>> {
        self.conn
            .query_row(SELECT_SELECTED_PROFILE, [], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    pub fn list(&mut self) -> Result<Vec<Profile>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_PROFILES)?;
        let profile_iter = stmt.query_map([], Self::map_row)?;

        let mut profiles = Vec::new();
        for profile in profile_iter {
            profiles.push(profile?);
        }
        Ok(profiles)
    }

    /// Moves the selection to the given profile.
    ///
    /// Two sequential writes: the previous selection is cleared first, then
    /// the target is marked. Returns `false` when the target id does not
    /// exist (the selection is then empty, as after deleting the selected
    /// profile).
    pub fn swap_selected(&mut self, id: i64) -> Result<bool> {
        self.conn.execute(CLEAR_SELECTED, [])?;
        let affected = self.conn.execute(SET_SELECTED, params![id])?;
        Ok(affected == 1)
    }

    fn map_row(row: &rusqlite::Row) -> rusqlite::Result<Profile> {
        Ok(Profile {
            id: row.get(0)?,
            username: row.get(1)?,
            password: row.get(2)?,
            is_selected: row.get(3)?,
        })
    }
}
