use rusqlite::Row;
use serde::Deserialize;

use super::FromSqliteRow;

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Credentials as stored, plaintext. Password hashing is out of scope.
#[derive(Debug, Clone)]
pub struct StoredCredentials {
    pub username: String,
    pub password: String,
}

impl StoredCredentials {
    /// Exact, case-sensitive match of both fields. No trimming.
    pub fn matches(&self, request: &LoginRequest) -> bool {
        self.username == request.username && self.password == request.password
    }
}

impl FromSqliteRow for StoredCredentials {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            username: row.get("username")?,
            password: row.get("password")?,
        })
    }
}
