use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::{CreateSet, CreateWorkout, Workout};
use crate::services::WorkoutService;

#[derive(Clone)]
pub struct WorkoutsState {
    pub workout_service: WorkoutService,
}

#[derive(Serialize)]
struct CreatedResponse {
    id: i64,
}

/// `POST /api/workouts`
///
/// Creates the workout and its user link atomically; the generated workout
/// id comes back so the caller can add sets to it.
pub async fn create(
    State(state): State<WorkoutsState>,
    Json(request): Json<CreateWorkout>,
) -> Result<Response> {
    let id = state.workout_service.create_workout(&request).await?;
    tracing::info!("Created workout {} for user {}", id, request.user_id);
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })).into_response())
}

/// `POST /api/workouts/{id}/sets`
pub async fn add_set(
    State(state): State<WorkoutsState>,
    Path(id): Path<i64>,
    Json(set): Json<CreateSet>,
) -> Result<Response> {
    let set_id = state.workout_service.add_set_to_workout(set, id).await?;
    tracing::info!("Added set {} to workout {}", set_id, id);
    Ok((StatusCode::CREATED, Json(CreatedResponse { id: set_id })).into_response())
}

/// `GET /api/workouts/{id}`
pub async fn show(
    State(state): State<WorkoutsState>,
    Path(id): Path<i64>,
) -> Result<Json<Workout>> {
    let workout = state.workout_service.get_workout(id).await?;
    workout
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No workout with id {id}")))
}
