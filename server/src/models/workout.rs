use chrono::NaiveDate;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::{ExerciseSet, FromSqliteRow};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    pub id: i64,
    pub date: NaiveDate,
    pub name: String,
    pub sets: Vec<ExerciseSet>,
}

impl FromSqliteRow for Workout {
    // Sets come from the bridge join, filled in by the repository
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            date: row.get("workout_date")?,
            name: row.get("name")?,
            sets: Vec::new(),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateWorkout {
    pub user_id: i64,
    pub date: NaiveDate,
    pub name: String,
}
