use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{AppError, Result};
use crate::models::{User, Workout};
use crate::services::{UserService, WorkoutService};

#[derive(Clone)]
pub struct UsersState {
    pub user_service: UserService,
    pub workout_service: WorkoutService,
}

/// `GET /api/users/{username}`
pub async fn get_user(
    State(state): State<UsersState>,
    Path(username): Path<String>,
) -> Result<Json<User>> {
    let user = state.user_service.get_user_by_username(&username).await?;
    user.map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No user named {username}")))
}

/// `GET /api/users/{id}/workouts`
pub async fn list_workouts(
    State(state): State<UsersState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Workout>>> {
    let workouts = state.workout_service.get_workouts_for_user(id).await?;
    Ok(Json(workouts))
}
