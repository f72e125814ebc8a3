//! Schema and seed initialization
//!
//! The schema is a fixed set of tables that is dropped and recreated at
//! startup. Seeding inserts the fixture credentials and user only when they
//! are absent, so it can be re-run without duplicating rows.

use crate::db::{DbConnection, DbPool};
use crate::error::Result;

pub const SEED_USERNAME: &str = "test";
pub const SEED_PASSWORD: &str = "test";

/// All tables in creation order. Drops happen in reverse so foreign keys
/// never dangle.
pub const TABLES: &[(&str, &str)] = &[
    (
        "user_credentials",
        "CREATE TABLE user_credentials (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL
        )",
    ),
    (
        "users",
        "CREATE TABLE users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            credentials_id INTEGER NOT NULL REFERENCES user_credentials (id),
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            total_workout_seconds INTEGER NOT NULL DEFAULT 0
        )",
    ),
    (
        "workouts",
        "CREATE TABLE workouts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            workout_date TEXT NOT NULL,
            name TEXT NOT NULL
        )",
    ),
    (
        "exercise_sets",
        "CREATE TABLE exercise_sets (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            exercise_id INTEGER NOT NULL,
            weight REAL NOT NULL,
            reps INTEGER NOT NULL,
            rest_seconds INTEGER NOT NULL
        )",
    ),
    (
        "user_workouts",
        "CREATE TABLE user_workouts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            workout_id INTEGER NOT NULL REFERENCES workouts (id),
            user_id INTEGER NOT NULL REFERENCES users (id),
            UNIQUE (workout_id, user_id)
        )",
    ),
    (
        "workout_sets",
        "CREATE TABLE workout_sets (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            set_id INTEGER NOT NULL REFERENCES exercise_sets (id),
            workout_id INTEGER NOT NULL REFERENCES workouts (id),
            UNIQUE (set_id, workout_id)
        )",
    ),
];

/// Drop and recreate every table.
pub fn reset(conn: &DbConnection) -> Result<()> {
    for (name, _) in TABLES.iter().rev() {
        conn.execute_batch(&format!("DROP TABLE IF EXISTS {name}"))?;
    }
    for (name, ddl) in TABLES {
        tracing::debug!("Creating table: {}", name);
        conn.execute_batch(ddl)?;
    }
    Ok(())
}

/// Insert fixture rows if they are not present yet.
pub fn seed(conn: &DbConnection) -> Result<()> {
    let existing: i64 = conn.query_row(
        "SELECT COUNT(*) FROM user_credentials WHERE username = ?",
        [SEED_USERNAME],
        |row| row.get(0),
    )?;

    if existing == 0 {
        conn.execute(
            "INSERT INTO user_credentials (username, password) VALUES (?, ?)",
            [SEED_USERNAME, SEED_PASSWORD],
        )?;
        tracing::info!("Seeded credentials for user: {}", SEED_USERNAME);
    }

    let credentials_id: i64 = conn.query_row(
        "SELECT id FROM user_credentials WHERE username = ?",
        [SEED_USERNAME],
        |row| row.get(0),
    )?;

    let user_exists: i64 = conn.query_row(
        "SELECT COUNT(*) FROM users WHERE credentials_id = ?",
        [credentials_id],
        |row| row.get(0),
    )?;

    if user_exists == 0 {
        conn.execute(
            "INSERT INTO users (credentials_id, name, email, total_workout_seconds)
             VALUES (?, ?, ?, 0)",
            rusqlite::params![credentials_id, "Test User", "test@example.com"],
        )?;
        tracing::info!("Seeded user profile for: {}", SEED_USERNAME);
    }

    Ok(())
}

/// Reset the schema and seed fixtures. Called once at startup.
pub fn initialize(pool: &DbPool) -> Result<()> {
    tracing::info!("Initializing database schema...");
    let conn = pool.get()?;
    reset(&conn)?;
    seed(&conn)?;
    tracing::info!("Schema initialized");
    Ok(())
}
