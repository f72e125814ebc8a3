use axum::{
    routing::{get, post},
    Router,
};

use crate::db::DbPool;
use crate::handlers::{auth, health, users, workouts};
use crate::repositories::{LoginRepository, UserRepository, WorkoutRepository};
use crate::services::{LoginService, UserService, WorkoutService};

pub fn create_router(
    auth_state: auth::AuthState,
    users_state: users::UsersState,
    workouts_state: workouts::WorkoutsState,
) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        // Auth routes
        .route("/api/auth/login", post(auth::check_credentials))
        .with_state(auth_state)
        // User routes
        .route("/api/users/{username}", get(users::get_user))
        .route("/api/users/{id}/workouts", get(users::list_workouts))
        .with_state(users_state)
        // Workout routes
        .route("/api/workouts", post(workouts::create))
        .route("/api/workouts/{id}", get(workouts::show))
        .route("/api/workouts/{id}/sets", post(workouts::add_set))
        .with_state(workouts_state)
}

/// Wire repositories, services and handler states over a pool. Used by the
/// binary and by tests.
pub fn app(pool: DbPool) -> Router {
    let login_repo = LoginRepository::new(pool.clone());
    let user_repo = UserRepository::new(pool.clone());
    let workout_repo = WorkoutRepository::new(pool);

    let login_service = LoginService::new(login_repo);
    let user_service = UserService::new(user_repo);
    let workout_service = WorkoutService::new(workout_repo);

    let auth_state = auth::AuthState { login_service };
    let users_state = users::UsersState {
        user_service,
        workout_service: workout_service.clone(),
    };
    let workouts_state = workouts::WorkoutsState { workout_service };

    create_router(auth_state, users_state, workouts_state)
}
