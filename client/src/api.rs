use reqwest::StatusCode;

use crate::error::{ClientError, Result};
use crate::models::{CreatedId, LoginInfo, NewSet, NewWorkout, User, Workout};

/// HTTP client for the fittrack backend.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// True for a 200, false for a 401; anything else is an error.
    pub async fn login(&self, username: &str, password: &str) -> Result<bool> {
        let body = LoginInfo {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&body)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::UNAUTHORIZED => {
                tracing::debug!("Login rejected for user: {}", username);
                Ok(false)
            }
            _ => Err(ClientError::from_response(response).await),
        }
    }

    pub async fn get_user(&self, username: &str) -> Result<Option<User>> {
        let response = self
            .http
            .get(self.url(&format!("/api/users/{username}")))
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(Some(response.json().await?)),
            StatusCode::NOT_FOUND => Ok(None),
            _ => Err(ClientError::from_response(response).await),
        }
    }

    pub async fn create_workout(&self, workout: &NewWorkout) -> Result<i64> {
        let response = self
            .http
            .post(self.url("/api/workouts"))
            .json(workout)
            .send()
            .await?;

        if response.status() == StatusCode::CREATED {
            let created: CreatedId = response.json().await?;
            tracing::debug!("Created workout {}", created.id);
            Ok(created.id)
        } else {
            Err(ClientError::from_response(response).await)
        }
    }

    pub async fn add_set(&self, workout_id: i64, set: &NewSet) -> Result<i64> {
        let response = self
            .http
            .post(self.url(&format!("/api/workouts/{workout_id}/sets")))
            .json(set)
            .send()
            .await?;

        if response.status() == StatusCode::CREATED {
            let created: CreatedId = response.json().await?;
            Ok(created.id)
        } else {
            Err(ClientError::from_response(response).await)
        }
    }

    pub async fn get_workout(&self, workout_id: i64) -> Result<Option<Workout>> {
        let response = self
            .http
            .get(self.url(&format!("/api/workouts/{workout_id}")))
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(Some(response.json().await?)),
            StatusCode::NOT_FOUND => Ok(None),
            _ => Err(ClientError::from_response(response).await),
        }
    }

    pub async fn list_workouts(&self, user_id: i64) -> Result<Vec<Workout>> {
        let response = self
            .http
            .get(self.url(&format!("/api/users/{user_id}/workouts")))
            .send()
            .await?;

        if response.status() == StatusCode::OK {
            Ok(response.json().await?)
        } else {
            Err(ClientError::from_response(response).await)
        }
    }
}
