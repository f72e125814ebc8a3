use rusqlite::OptionalExtension;

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{FromSqliteRow, StoredCredentials};

#[derive(Clone)]
pub struct LoginRepository {
    pool: DbPool,
}

impl LoginRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Fetch stored credentials for a username. Stored values are returned
    /// untouched so the comparison stays exact.
    pub async fn get_credentials(&self, username: &str) -> Result<Option<StoredCredentials>> {
        if username.is_empty() {
            return Ok(None);
        }

        let pool = self.pool.clone();
        let username = username.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt =
                conn.prepare("SELECT username, password FROM user_credentials WHERE username = ?")?;
            let result = stmt
                .query_row([&username], StoredCredentials::from_row)
                .optional()?;
            Ok(result)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
