// handlers/auth/login.rs - login form, POST /login, GET /logout

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{AppendHeaders, Html, IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::config;
use crate::error::ApiError;
use crate::middleware::auth::extract_session_id;
use crate::middleware::SESSION_COOKIE;
use crate::services::auth_service;
use crate::session::{Role, SessionUser};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// GET /login - login form shell; the real markup is the renderer's concern
pub async fn login_form() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head><title>RPV Login</title></head>
<body>
  <h1>Resort Property Ventures</h1>
  <form method="post" action="/login">
    <input name="username" placeholder="Username" autocomplete="username">
    <input name="password" type="password" placeholder="Password" autocomplete="current-password">
    <button type="submit">Log in</button>
  </form>
  <p><a href="/register/owner">Register as owner</a> | <a href="/register/manager">Register as manager</a></p>
</body>
</html>"#,
    )
}

/// POST /login - Authenticate user and establish a session
///
/// The response carries the session cookie plus a JSON envelope the client
/// uses to redirect. Unknown usernames and wrong passwords get the same 401
/// message; nothing distinguishes the two cases.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = auth_service::verify_user(&state.db, &payload.username, &payload.password).await?;

    let Some(user) = user else {
        tracing::info!("Failed login attempt for username '{}'", payload.username);
        return Err(ApiError::unauthorized("Invalid username or password"));
    };

    let role = Role::parse(&user.role).ok_or_else(|| {
        tracing::error!("User '{}' has unrecognized role '{}'", user.username, user.role);
        ApiError::internal_server_error("An error occurred while processing your request")
    })?;

    let session = state
        .sessions
        .create(SessionUser {
            id: user.id,
            username: user.username.clone(),
            role,
        })
        .await;

    tracing::info!("User '{}' logged in with role {}", user.username, role);

    let max_age = config::config().security.session_ttl_hours * 3600;
    let cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE, session.id, max_age
    );

    Ok((
        AppendHeaders([(header::SET_COOKIE, cookie)]),
        Json(json!({
            "success": true,
            "message": "Login successful",
            "redirectTo": "/directory"
        })),
    ))
}

/// GET /logout - destroy the session and send the client back to the login
/// page. Destroying an already-destroyed session behaves identically.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(session_id) = extract_session_id(&headers) {
        state.sessions.destroy(session_id).await;
    }

    let cleared = format!("{}=; Path=/; HttpOnly; Max-Age=0", SESSION_COOKIE);
    (
        AppendHeaders([(header::SET_COOKIE, cleared)]),
        Redirect::to("/login"),
    )
}
