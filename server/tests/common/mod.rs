use axum::Router;
use chrono::NaiveDate;

use fittrack_server::db::{create_memory_pool, DbPool};
use fittrack_server::routes;
use fittrack_server::schema;

pub fn setup_test_db() -> DbPool {
    let pool = create_memory_pool().expect("Failed to create test database");
    {
        let conn = pool.get().expect("Failed to get connection");
        schema::reset(&conn).expect("Failed to create schema");
        schema::seed(&conn).expect("Failed to seed fixtures");
    }
    pool
}

pub fn create_test_app(pool: DbPool) -> Router {
    routes::app(pool)
}

/// Insert a credentials + user pair directly, returning the user id.
#[allow(dead_code)]
pub fn create_test_user(pool: &DbPool, username: &str, password: &str, name: &str) -> i64 {
    let conn = pool.get().unwrap();
    conn.execute(
        "INSERT INTO user_credentials (username, password) VALUES (?, ?)",
        [username, password],
    )
    .unwrap();
    let credentials_id = conn.last_insert_rowid();
    conn.execute(
        "INSERT INTO users (credentials_id, name, email, total_workout_seconds)
         VALUES (?, ?, ?, 0)",
        rusqlite::params![credentials_id, name, format!("{username}@example.com")],
    )
    .unwrap();
    conn.last_insert_rowid()
}

/// Insert a workout + bridge row directly, returning the workout id.
#[allow(dead_code)]
pub fn create_test_workout(pool: &DbPool, user_id: i64, date: NaiveDate, name: &str) -> i64 {
    let conn = pool.get().unwrap();
    conn.execute(
        "INSERT INTO workouts (workout_date, name) VALUES (?, ?)",
        rusqlite::params![date, name],
    )
    .unwrap();
    let workout_id = conn.last_insert_rowid();
    conn.execute(
        "INSERT INTO user_workouts (workout_id, user_id) VALUES (?, ?)",
        rusqlite::params![workout_id, user_id],
    )
    .unwrap();
    workout_id
}

#[allow(dead_code)]
pub fn count_rows(pool: &DbPool, table: &str) -> i64 {
    let conn = pool.get().unwrap();
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
        row.get(0)
    })
    .unwrap()
}
