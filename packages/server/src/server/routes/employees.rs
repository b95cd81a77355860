//! Employee (counselor) registration and login routes

use axum::{extract::Extension, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::common::ApiError;
use crate::domains::counselors::actions::{login_counselor, register_counselor};
use crate::server::app::AppState;

#[derive(Deserialize)]
pub struct RegisterRequest {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    email: Option<String>,
    password: Option<String>,
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

/// POST /api/employees/register
///
/// Public route - no authentication required
pub async fn register_handler(
    Extension(state): Extension<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let (name, email, password) = match (
        non_empty(&body.name),
        non_empty(&body.email),
        non_empty(&body.password),
    ) {
        (Some(name), Some(email), Some(password)) => (name, email, password),
        _ => {
            return Err(ApiError::Validation(
                "Please provide name, email, and password".to_string(),
            ))
        }
    };

    let counselor = register_counselor(name, email, password, &state.db_pool).await?;
    let token = state.jwt_service.create_token(counselor.id)?;

    // The password hash is never sent back
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Employee registered successfully",
            "employee": {
                "id": counselor.id,
                "name": counselor.name,
                "email": counselor.email,
                "createdAt": counselor.created_at,
            },
            "token": token,
        })),
    ))
}

/// POST /api/employees/login
///
/// Public route - no authentication required
pub async fn login_handler(
    Extension(state): Extension<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    let (email, password) = match (non_empty(&body.email), non_empty(&body.password)) {
        (Some(email), Some(password)) => (email, password),
        _ => {
            return Err(ApiError::Validation(
                "Please provide email and password".to_string(),
            ))
        }
    };

    let counselor = login_counselor(email, password, &state.db_pool).await?;
    let token = state.jwt_service.create_token(counselor.id)?;

    Ok(Json(json!({
        "message": "Login successful",
        "employee": {
            "id": counselor.id,
            "name": counselor.name,
            "email": counselor.email,
        },
        "token": token,
    })))
}
