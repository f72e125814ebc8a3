use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::{AppError, Result};
use crate::models::LoginRequest;
use crate::services::LoginService;

#[derive(Clone)]
pub struct AuthState {
    pub login_service: LoginService,
}

/// `POST /api/auth/login`
///
/// 200 with a plain confirmation string when the credentials match, 401
/// otherwise. Blank fields never reach the service.
pub async fn check_credentials(
    State(state): State<AuthState>,
    Json(request): Json<LoginRequest>,
) -> Result<Response> {
    if request.username.trim().is_empty() || request.password.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Credentials cannot be empty".to_string(),
        ));
    }

    if state.login_service.check_credentials(&request).await? {
        Ok((StatusCode::OK, "Valid Credentials").into_response())
    } else {
        Err(AppError::Unauthorized(
            "Invalid username or password".to_string(),
        ))
    }
}
