//! Wire types mirroring the server's JSON shapes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct LoginInfo {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    pub credentials_id: i64,
    pub name: String,
    pub email: String,
    pub total_workout_seconds: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExerciseSet {
    pub id: i64,
    pub exercise_id: i64,
    pub weight: f64,
    pub reps: i64,
    pub rest_seconds: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Workout {
    pub id: i64,
    pub date: NaiveDate,
    pub name: String,
    pub sets: Vec<ExerciseSet>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewWorkout {
    pub user_id: i64,
    pub date: NaiveDate,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewSet {
    pub exercise_id: i64,
    pub weight: f64,
    pub reps: i64,
    pub rest_seconds: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedId {
    pub id: i64,
}
