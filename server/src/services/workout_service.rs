use crate::error::{AppError, Result};
use crate::models::{CreateSet, CreateWorkout, Workout};
use crate::repositories::WorkoutRepository;

#[derive(Clone)]
pub struct WorkoutService {
    repo: WorkoutRepository,
}

impl WorkoutService {
    pub fn new(repo: WorkoutRepository) -> Self {
        Self { repo }
    }

    pub async fn create_workout(&self, request: &CreateWorkout) -> Result<i64> {
        if request.name.trim().is_empty() {
            return Err(AppError::Validation("Workout name is required".to_string()));
        }
        if request.user_id <= 0 {
            return Err(AppError::Validation("User id is required".to_string()));
        }
        self.repo
            .create_workout(request.date, &request.name, request.user_id)
            .await
    }

    pub async fn add_set_to_workout(&self, set: CreateSet, workout_id: i64) -> Result<i64> {
        if workout_id <= 0 {
            return Err(AppError::Validation("Workout id is required".to_string()));
        }
        if set.reps <= 0 {
            return Err(AppError::Validation(
                "Set must have at least one rep".to_string(),
            ));
        }
        if set.weight < 0.0 || set.rest_seconds < 0 {
            return Err(AppError::Validation(
                "Weight and rest time cannot be negative".to_string(),
            ));
        }
        self.repo.add_set_to_workout(set, workout_id).await
    }

    pub async fn get_workout(&self, workout_id: i64) -> Result<Option<Workout>> {
        if workout_id <= 0 {
            return Err(AppError::Validation("Workout id is required".to_string()));
        }
        self.repo.get_workout(workout_id).await
    }

    pub async fn get_workouts_for_user(&self, user_id: i64) -> Result<Vec<Workout>> {
        if user_id <= 0 {
            return Err(AppError::Validation("User id is required".to_string()));
        }
        self.repo.find_workouts_by_user(user_id).await
    }
}
