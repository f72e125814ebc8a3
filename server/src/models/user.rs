use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::FromSqliteRow;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub credentials_id: i64,
    pub name: String,
    pub email: String,
    pub total_workout_seconds: i64,
}

impl FromSqliteRow for User {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            credentials_id: row.get("credentials_id")?,
            name: row.get("name")?,
            email: row.get("email")?,
            total_workout_seconds: row.get("total_workout_seconds")?,
        })
    }
}
