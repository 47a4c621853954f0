use chrono::Utc;
use crate::errors::SmartdoError;
use crate::models::{Task, Urgency};
use crate::tasks::TaskRepository;
use super::Database;

const TASK_COLUMNS: &str =
    "id, title, description, due_date, category, completed, urgency, reminder_date_time, reminder_reasoning";

fn row_to_task(row: &rusqlite::Row) -> rusqlite::Result<Task> {
    let urgency_text: String = row.get(6)?;
    let urgency = urgency_text.parse::<Urgency>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(6, rusqlite::types::Type::Text, e.into())
    })?;

    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        due_date: row.get(3)?,
        category: row.get(4)?,
        completed: row.get::<_, i64>(5)? != 0,
        urgency,
        reminder_date_time: row.get(7)?,
        reminder_reasoning: row.get(8)?,
    })
}

impl TaskRepository for Database {
    fn get(&self, id: &str) -> Result<Option<Task>, SmartdoError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!("SELECT {} FROM tasks WHERE id = ?1", TASK_COLUMNS))
            .map_err(|e| SmartdoError::Database(format!("Query failed: {}", e)))?;

        match stmt.query_row(rusqlite::params![id], row_to_task) {
            Ok(task) => Ok(Some(task)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(SmartdoError::Database(format!("Query error: {}", e))),
        }
    }

    fn list(&self) -> Result<Vec<Task>, SmartdoError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!("SELECT {} FROM tasks ORDER BY seq", TASK_COLUMNS))
            .map_err(|e| SmartdoError::Database(format!("Query failed: {}", e)))?;

        let rows = stmt.query_map([], row_to_task)
            .map_err(|e| SmartdoError::Database(format!("Query error: {}", e)))?;

        let mut tasks = Vec::new();
        for row in rows {
            tasks.push(row.map_err(|e| SmartdoError::Database(format!("Row error: {}", e)))?);
        }
        Ok(tasks)
    }

    fn put(&self, task: &Task) -> Result<(), SmartdoError> {
        let conn = self.lock()?;
        let now = Utc::now().to_rfc3339();
        conn.execute(
            "INSERT INTO tasks (id, title, description, due_date, category, completed, urgency, reminder_date_time, reminder_reasoning, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?10)
             ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                description = excluded.description,
                due_date = excluded.due_date,
                category = excluded.category,
                completed = excluded.completed,
                urgency = excluded.urgency,
                reminder_date_time = excluded.reminder_date_time,
                reminder_reasoning = excluded.reminder_reasoning,
                updated_at = excluded.updated_at",
            rusqlite::params![
                task.id,
                task.title,
                task.description,
                task.due_date,
                task.category,
                task.completed as i64,
                task.urgency.as_str(),
                task.reminder_date_time,
                task.reminder_reasoning,
                now,
            ],
        ).map_err(|e| SmartdoError::Database(format!("Failed to save task: {}", e)))?;
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<bool, SmartdoError> {
        let conn = self.lock()?;
        let affected = conn.execute("DELETE FROM tasks WHERE id = ?1", rusqlite::params![id])
            .map_err(|e| SmartdoError::Database(format!("Delete failed: {}", e)))?;
        Ok(affected > 0)
    }
}
