use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::FromSqliteRow;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseSet {
    pub id: i64,
    pub exercise_id: i64,
    pub weight: f64,
    pub reps: i64,
    pub rest_seconds: i64,
}

impl FromSqliteRow for ExerciseSet {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            exercise_id: row.get("exercise_id")?,
            weight: row.get("weight")?,
            reps: row.get("reps")?,
            rest_seconds: row.get("rest_seconds")?,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSet {
    pub exercise_id: i64,
    pub weight: f64,
    pub reps: i64,
    pub rest_seconds: i64,
}
