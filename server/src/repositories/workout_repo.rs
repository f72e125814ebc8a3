use chrono::NaiveDate;
use rusqlite::OptionalExtension;

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{CreateSet, ExerciseSet, FromSqliteRow, Workout};

#[derive(Clone)]
pub struct WorkoutRepository {
    pool: DbPool,
}

impl WorkoutRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Insert a workout and its user bridge row in one transaction.
    ///
    /// Either both rows land or neither does: the transaction rolls back on
    /// drop if any statement fails, so a workout row never exists without a
    /// `user_workouts` entry.
    pub async fn create_workout(&self, date: NaiveDate, name: &str, user_id: i64) -> Result<i64> {
        let pool = self.pool.clone();
        let name = name.to_string();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            let tx = conn.transaction()?;

            tx.execute(
                "INSERT INTO workouts (workout_date, name) VALUES (?, ?)",
                rusqlite::params![date, name],
            )?;
            let workout_id = tx.last_insert_rowid();

            tx.execute(
                "INSERT INTO user_workouts (workout_id, user_id) VALUES (?, ?)",
                rusqlite::params![workout_id, user_id],
            )?;

            tx.commit()?;
            Ok(workout_id)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Same two-statement transactional insert as `create_workout`, for the
    /// set row and its `workout_sets` bridge row.
    pub async fn add_set_to_workout(&self, set: CreateSet, workout_id: i64) -> Result<i64> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            let tx = conn.transaction()?;

            tx.execute(
                "INSERT INTO exercise_sets (exercise_id, weight, reps, rest_seconds)
                 VALUES (?, ?, ?, ?)",
                rusqlite::params![set.exercise_id, set.weight, set.reps, set.rest_seconds],
            )?;
            let set_id = tx.last_insert_rowid();

            tx.execute(
                "INSERT INTO workout_sets (set_id, workout_id) VALUES (?, ?)",
                rusqlite::params![set_id, workout_id],
            )?;

            tx.commit()?;
            Ok(set_id)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// A workout with all its sets resolved through the bridge table.
    pub async fn get_workout(&self, id: i64) -> Result<Option<Workout>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt =
                conn.prepare("SELECT id, workout_date, name FROM workouts WHERE id = ?")?;
            let workout = stmt.query_row([id], Workout::from_row).optional()?;

            let Some(mut workout) = workout else {
                return Ok(None);
            };

            let mut stmt = conn.prepare(
                "SELECT es.id, es.exercise_id, es.weight, es.reps, es.rest_seconds
                 FROM exercise_sets es
                 JOIN workout_sets ws ON ws.set_id = es.id
                 WHERE ws.workout_id = ?
                 ORDER BY es.id",
            )?;
            workout.sets = stmt
                .query_map([id], ExerciseSet::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            Ok(Some(workout))
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Workouts linked to a user, newest first.
    pub async fn find_workouts_by_user(&self, user_id: i64) -> Result<Vec<Workout>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(
                "SELECT w.id, w.workout_date, w.name
                 FROM workouts w
                 JOIN user_workouts uw ON uw.workout_id = w.id
                 WHERE uw.user_id = ?
                 ORDER BY w.workout_date DESC, w.id DESC",
            )?;
            let workouts = stmt
                .query_map([user_id], Workout::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(workouts)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
