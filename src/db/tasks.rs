use crate::db::db::Db;
use crate::libs::task::{StatusFilter, Task, TaskFilter};
use anyhow::Result;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use std::str::FromStr;

const INSERT_TASK: &str = "INSERT INTO tasks (profile_id, date, priority, is_completed, category, details) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const UPDATE_TASK: &str =
    "UPDATE tasks SET profile_id = ?2, date = ?3, priority = ?4, is_completed = ?5, category = ?6, details = ?7 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const SELECT_TASK_BY_ID: &str = "SELECT id, profile_id, date, priority, is_completed, category, details FROM tasks WHERE id = ?1";
const SELECT_TASKS: &str = "SELECT id, profile_id, date, priority, is_completed, category, details FROM tasks WHERE profile_id = ? AND date = ?";
const SELECT_CATEGORIES: &str =
    "SELECT DISTINCT category FROM tasks WHERE profile_id = ?1 AND date = ?2 AND category IS NOT NULL ORDER BY category";

/// Task store. Opens its own connection and releases it on drop.
pub struct Tasks {
    conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    pub fn insert(&mut self, task: &Task) -> Result<i64> {
        self.conn.execute(
            INSERT_TASK,
            params![
                task.profile_id,
                task.date,
                task.priority.as_str(),
                task.is_completed,
                task.category,
                task.details
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Updates a task by id. Returns `true` iff exactly one row changed.
    pub fn update(&mut self, task: &Task) -> Result<bool> {
        let Some(id) = task.id else {
            return Ok(false);
        };
        let affected = self.conn.execute(
            UPDATE_TASK,
            params![
                id,
                task.profile_id,
                task.date,
                task.priority.as_str(),
                task.is_completed,
                task.category,
                task.details
            ],
        )?;
        Ok(affected == 1)
    }

    pub fn delete(&mut self, id: i64) -> Result<bool> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        Ok(affected == 1)
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Task>> {
        self.conn
            .query_row(SELECT_TASK_BY_ID, params![id], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    /// Tasks for one profile and date, narrowed by the filter.
    ///
    /// Every predicate is a bound parameter; filter values never reach the
    /// statement text.
    pub fn fetch(&mut self, profile_id: i64, date: &str, filter: &TaskFilter) -> Result<Vec<Task>> {
        let mut sql = SELECT_TASKS.to_string();
        let mut bindings: Vec<Value> = vec![Value::from(profile_id), Value::from(date.to_string())];

        if let Some(category) = &filter.category {
            sql.push_str(" AND category = ?");
            bindings.push(Value::from(category.clone()));
        }
        if let Some(priority) = filter.priority {
            sql.push_str(" AND priority = ?");
            bindings.push(Value::from(priority.as_str().to_string()));
        }
        match filter.status {
            StatusFilter::Any => {}
            StatusFilter::OnlyIncomplete => {
                sql.push_str(" AND is_completed = ?");
                bindings.push(Value::from(0i64));
            }
            StatusFilter::OnlyComplete => {
                sql.push_str(" AND is_completed = ?");
                bindings.push(Value::from(1i64));
            }
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let task_iter = stmt.query_map(params_from_iter(bindings.iter()), Self::map_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    /// Distinct non-NULL categories in use for the given profile and date.
    pub fn categories(&mut self, profile_id: i64, date: &str) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(SELECT_CATEGORIES)?;
        let category_iter = stmt.query_map(params![profile_id, date], |row| row.get(0))?;

        let mut categories = Vec::new();
        for category in category_iter {
            categories.push(category?);
        }
        Ok(categories)
    }

    fn map_row(row: &rusqlite::Row) -> rusqlite::Result<Task> {
        let priority: String = row.get(3)?;
        Ok(Task {
            id: row.get(0)?,
            profile_id: row.get(1)?,
            date: row.get(2)?,
            // Unknown stored values degrade to the schema default.
            priority: crate::libs::task::Priority::from_str(&priority).unwrap_or_default(),
            is_completed: row.get(4)?,
            category: row.get(5)?,
            details: row.get(6)?,
        })
    }
}
