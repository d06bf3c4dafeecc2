//! Task CRUD operations.

use super::{Database, now_ms};
use crate::types::Task;
use anyhow::Result;
use rusqlite::{Connection, Row, params};

pub fn parse_task_row(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get("id")?,
        description: row.get("description")?,
        // Normalize the stored 0/1 integer to a boolean
        completed: row.get::<_, i64>("completed")? != 0,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

/// Internal helper to get a task using an existing connection.
fn get_task_internal(conn: &Connection, task_id: i64) -> Result<Option<Task>> {
    let mut stmt = conn.prepare(
        "SELECT id, description, completed, created_at, updated_at
         FROM tasks WHERE id = ?1",
    )?;

    let result = stmt.query_row(params![task_id], parse_task_row);

    match result {
        Ok(task) => Ok(Some(task)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

impl Database {
    /// List all tasks, newest first.
    ///
    /// Rows created in the same millisecond fall back to id order so the
    /// listing stays stable.
    pub fn list_tasks(&self) -> Result<Vec<Task>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, description, completed, created_at, updated_at
                 FROM tasks
                 ORDER BY created_at DESC, id DESC",
            )?;

            let tasks = stmt
                .query_map([], parse_task_row)?
                .collect::<Result<Vec<_>, _>>()?;

            Ok(tasks)
        })
    }

    /// Get a task by ID.
    pub fn get_task(&self, task_id: i64) -> Result<Option<Task>> {
        self.with_conn(|conn| get_task_internal(conn, task_id))
    }

    /// Create a new task. The ID is assigned by SQLite.
    pub fn create_task(&self, description: &str) -> Result<Task> {
        let now = now_ms();

        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO tasks (description, completed, created_at, updated_at)
                 VALUES (?1, 0, ?2, ?2)",
                params![description, now],
            )?;

            Ok(Task {
                id: conn.last_insert_rowid(),
                description: description.to_string(),
                completed: false,
                created_at: now,
                updated_at: now,
            })
        })
    }

    /// Merge the supplied fields onto a stored task and persist.
    ///
    /// Returns `None` if no task with the given ID exists. Fields left as
    /// `None` keep their stored values; `updated_at` is always bumped.
    pub fn update_task(
        &self,
        task_id: i64,
        description: Option<&str>,
        completed: Option<bool>,
    ) -> Result<Option<Task>> {
        let now = now_ms();

        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;

            let Some(task) = get_task_internal(&tx, task_id)? else {
                return Ok(None);
            };

            let new_description = match description {
                Some(d) => d.to_string(),
                None => task.description,
            };
            let new_completed = completed.unwrap_or(task.completed);

            tx.execute(
                "UPDATE tasks SET description = ?1, completed = ?2, updated_at = ?3
                 WHERE id = ?4",
                params![new_description, new_completed, now, task_id],
            )?;

            tx.commit()?;

            Ok(Some(Task {
                id: task_id,
                description: new_description,
                completed: new_completed,
                created_at: task.created_at,
                updated_at: now,
            }))
        })
    }

    /// Delete a task by ID. Returns false if no row was affected.
    pub fn delete_task(&self, task_id: i64) -> Result<bool> {
        self.with_conn(|conn| {
            let affected = conn.execute("DELETE FROM tasks WHERE id = ?1", params![task_id])?;
            Ok(affected > 0)
        })
    }
}
