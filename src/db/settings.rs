use crate::errors::SmartdoError;
use crate::tasks::SettingsRepository;
use super::Database;

impl SettingsRepository for Database {
    fn get_setting(&self, key: &str) -> Result<Option<String>, SmartdoError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT value FROM settings WHERE key = ?1")
            .map_err(|e| SmartdoError::Database(format!("Query failed: {}", e)))?;

        match stmt.query_row(rusqlite::params![key], |row: &rusqlite::Row| row.get::<_, String>(0)) {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(SmartdoError::Database(format!("Query error: {}", e))),
        }
    }

    fn set_setting(&self, key: &str, value: &str) -> Result<(), SmartdoError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
            rusqlite::params![key, value],
        ).map_err(|e| SmartdoError::Database(format!("Insert failed: {}", e)))?;
        Ok(())
    }
}
