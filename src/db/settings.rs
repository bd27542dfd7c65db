use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::timer::TimerSettings;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

pub const SETTING_POMODORO_DURATION: &str = "Pomodoro Timer Duration (Seconds)";
pub const SETTING_SHORT_BREAK_DURATION: &str = "Short Break Timer Duration (Seconds)";
pub const SETTING_LONG_BREAK_DURATION: &str = "Long Break Timer Duration (Seconds)";
pub const SETTING_LONG_BREAK_INTERVAL: &str = "Long Break Interval";

/// The fixed settings row set with its default values.
pub const DEFAULT_SETTINGS: [(&str, &str); 4] = [
    (SETTING_POMODORO_DURATION, "1500"),
    (SETTING_SHORT_BREAK_DURATION, "300"),
    (SETTING_LONG_BREAK_DURATION, "900"),
    (SETTING_LONG_BREAK_INTERVAL, "4"),
];

const SCHEMA_SETTINGS: &str = "CREATE TABLE IF NOT EXISTS settings (
    description TEXT NOT NULL UNIQUE,
    value TEXT NOT NULL
)";
const SELECT_SETTING: &str = "SELECT value FROM settings WHERE description = ?1";
const SELECT_ALL_SETTINGS: &str = "SELECT description, value FROM settings ORDER BY description";
const UPDATE_SETTING: &str = "UPDATE settings SET value = ?2 WHERE description = ?1";
const INSERT_SETTING: &str = "INSERT OR IGNORE INTO settings (description, value) VALUES (?1, ?2)";
const DROP_SETTINGS: &str = "DROP TABLE IF EXISTS settings";

/// Settings store. Opens its own connection and releases it on drop.
///
/// The row set is seeded at schema creation, so a missing key indicates a
/// broken store and surfaces as an error rather than an absent value.
pub struct Settings {
    conn: Connection,
}

impl Settings {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Reads a numeric setting by key.
    pub fn get(&mut self, key: &str) -> Result<i64> {
        let value: Option<String> = self
            .conn
            .query_row(SELECT_SETTING, params![key], |row| row.get(0))
            .optional()?;

        let value = value.ok_or_else(|| msg_error_anyhow!(Message::SettingMissing(key.to_string())))?;
        value
            .parse()
            .map_err(|_| msg_error_anyhow!(Message::SettingNotNumeric(key.to_string(), value.clone())))
    }

    /// Overwrites one setting. Returns `true` iff exactly one row changed.
    pub fn update(&mut self, key: &str, value: i64) -> Result<bool> {
        let affected = self.conn.execute(UPDATE_SETTING, params![key, value.to_string()])?;
        Ok(affected == 1)
    }

    /// All settings rows for display.
    pub fn list(&mut self) -> Result<Vec<(String, String)>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_SETTINGS)?;
        let setting_iter = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;

        let mut settings = Vec::new();
        for setting in setting_iter {
            settings.push(setting?);
        }
        Ok(settings)
    }

    /// Drops and recreates the settings table with the default row set.
    pub fn reset_to_defaults(&mut self) -> Result<()> {
        self.conn.execute(DROP_SETTINGS, [])?;
        self.conn.execute(SCHEMA_SETTINGS, [])?;
        for (description, value) in DEFAULT_SETTINGS {
            self.conn.execute(INSERT_SETTING, params![description, value])?;
        }
        Ok(())
    }

    /// Loads the four timer values as one struct.
    pub fn timer_settings(&mut self) -> Result<TimerSettings> {
        Ok(TimerSettings {
            pomodoro_secs: self.get_duration(SETTING_POMODORO_DURATION)?,
            short_break_secs: self.get_duration(SETTING_SHORT_BREAK_DURATION)?,
            long_break_secs: self.get_duration(SETTING_LONG_BREAK_DURATION)?,
            long_break_interval: self.get_duration(SETTING_LONG_BREAK_INTERVAL)?,
        })
    }

    /// Persists all four timer values. Callers validate first, so this
    /// never runs for a rejected settings set.
    pub fn update_timer_settings(&mut self, settings: &TimerSettings) -> Result<()> {
        let writes = [
            (SETTING_POMODORO_DURATION, settings.pomodoro_secs),
            (SETTING_SHORT_BREAK_DURATION, settings.short_break_secs),
            (SETTING_LONG_BREAK_DURATION, settings.long_break_secs),
            (SETTING_LONG_BREAK_INTERVAL, settings.long_break_interval),
        ];
        for (key, value) in writes {
            if !self.update(key, i64::from(value))? {
                return Err(msg_error_anyhow!(Message::SettingMissing(key.to_string())));
            }
        }
        Ok(())
    }

    fn get_duration(&mut self, key: &str) -> Result<u32> {
        let value = self.get(key)?;
        u32::try_from(value).map_err(|_| msg_error_anyhow!(Message::SettingNotNumeric(key.to_string(), value.to_string())))
    }
}
