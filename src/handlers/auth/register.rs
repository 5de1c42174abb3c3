// handlers/auth/register.rs - registration forms and POST handlers for the
// two self-service roles.

use axum::{extract::State, response::Html, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config;
use crate::error::ApiError;
use crate::services::auth_service;
use crate::session::Role;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

/// GET /register/owner
pub async fn owner_form() -> Html<String> {
    Html(register_form("owner"))
}

/// GET /register/manager
pub async fn manager_form() -> Html<String> {
    Html(register_form("manager"))
}

/// POST /register/owner
pub async fn register_owner(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<Value>, ApiError> {
    register(&state, payload, Role::Owner).await
}

/// POST /register/manager
pub async fn register_manager(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<Value>, ApiError> {
    register(&state, payload, Role::Manager).await
}

async fn register(
    state: &AppState,
    payload: RegisterRequest,
    role: Role,
) -> Result<Json<Value>, ApiError> {
    let min_length = config::config().security.min_password_length;
    validate_registration(&payload, min_length)?;

    auth_service::register_user(&state.db, &payload.username, &payload.password, role).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Registration successful",
        "redirectTo": "/login"
    })))
}

/// Registration policy: all fields present, matching passwords, minimum
/// password length. Duplicate usernames are rejected by the service layer.
fn validate_registration(payload: &RegisterRequest, min_length: usize) -> Result<(), ApiError> {
    if payload.username.is_empty() || payload.password.is_empty() || payload.confirm_password.is_empty()
    {
        return Err(ApiError::validation("All fields are required"));
    }

    if payload.password != payload.confirm_password {
        return Err(ApiError::validation("Passwords do not match"));
    }

    if payload.password.len() < min_length {
        return Err(ApiError::validation(format!(
            "Password must be at least {} characters",
            min_length
        )));
    }

    Ok(())
}

fn register_form(role: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>RPV Registration</title></head>
<body>
  <h1>Register ({role})</h1>
  <form method="post" action="/register/{role}">
    <input name="username" placeholder="Username" autocomplete="username">
    <input name="password" type="password" placeholder="Password">
    <input name="confirmPassword" type="password" placeholder="Confirm password">
    <button type="submit">Register</button>
  </form>
  <p><a href="/login">Back to login</a></p>
</body>
</html>"#
    )
}
