use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{Redirect, Response},
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::session::{Role, Session};
use crate::state::AppState;

/// Cookie carrying the opaque session identifier.
pub const SESSION_COOKIE: &str = "rpv_session";

/// Authentication guard. Resolves the session cookie against the store and
/// injects the session into the request; anything without a live session is
/// sent back to the login page. Runs before any role check.
pub async fn session_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, Redirect> {
    let Some(session_id) = extract_session_id(request.headers()) else {
        return Err(Redirect::to("/login"));
    };

    let Some(session) = state.sessions.resolve(session_id).await else {
        return Err(Redirect::to("/login"));
    };

    request.extensions_mut().insert(session);
    Ok(next.run(request).await)
}

/// Role guard for manager-only mutations. Hard failure: 403 with a
/// structured denial payload, no redirect.
pub async fn require_manager(request: Request, next: Next) -> Result<Response, ApiError> {
    let session = request
        .extensions()
        .get::<Session>()
        .ok_or_else(|| ApiError::unauthorized("Authentication required before role checks"))?;

    check_role(session, Role::Manager)?;
    Ok(next.run(request).await)
}

/// Symmetric owner-only guard. Wired to no route.
pub async fn require_owner(request: Request, next: Next) -> Result<Response, ApiError> {
    let session = request
        .extensions()
        .get::<Session>()
        .ok_or_else(|| ApiError::unauthorized("Authentication required before role checks"))?;

    check_role(session, Role::Owner)?;
    Ok(next.run(request).await)
}

pub fn check_role(session: &Session, role: Role) -> Result<(), ApiError> {
    if session.user.role != role {
        tracing::warn!(
            "Role check failed: user '{}' has role {}, {} required",
            session.user.username,
            session.user.role,
            role
        );
        return Err(ApiError::forbidden(format!("Access denied: {} role required", role)));
    }
    Ok(())
}

/// Extract the session id from the Cookie header
pub(crate) fn extract_session_id(headers: &HeaderMap) -> Option<Uuid> {
    let cookies = headers.get("cookie")?.to_str().ok()?;

    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == SESSION_COOKIE {
            value.parse::<Uuid>().ok()
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, StatusCode};
    use axum::{middleware, routing::post, Extension, Router};
    use chrono::{Duration, Utc};
    use tower::ServiceExt;

    fn session_with_role(role: Role) -> Session {
        let now = Utc::now();
        Session {
            id: Uuid::new_v4(),
            user: crate::session::SessionUser {
                id: 1,
                username: "pat".to_string(),
                role,
            },
            created_at: now,
            expires_at: now + Duration::hours(24),
        }
    }

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, value.parse().unwrap());
        headers
    }

    #[test]
    fn extracts_session_id_from_cookie_header() {
        let id = Uuid::new_v4();
        let headers = headers_with_cookie(&format!("theme=dark; {}={}", SESSION_COOKIE, id));
        assert_eq!(extract_session_id(&headers), Some(id));
    }

    #[test]
    fn ignores_missing_or_malformed_cookies() {
        assert_eq!(extract_session_id(&HeaderMap::new()), None);
        assert_eq!(extract_session_id(&headers_with_cookie("theme=dark")), None);
        let headers = headers_with_cookie(&format!("{}=not-a-uuid", SESSION_COOKIE));
        assert_eq!(extract_session_id(&headers), None);
    }

    #[test]
    fn check_role_matches_exactly() {
        let manager = session_with_role(Role::Manager);
        assert!(check_role(&manager, Role::Manager).is_ok());
        assert!(check_role(&manager, Role::Owner).is_err());

        let owner = session_with_role(Role::Owner);
        assert!(check_role(&owner, Role::Owner).is_ok());
        assert!(check_role(&owner, Role::Manager).is_err());
    }

    #[tokio::test]
    async fn manager_gate_rejects_owner_sessions() {
        let app = Router::new()
            .route("/guarded", post(|| async { "ok" }))
            .route_layer(middleware::from_fn(require_manager))
            .layer(Extension(session_with_role(Role::Owner)));

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .method("POST")
                    .uri("/guarded")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn manager_gate_passes_manager_sessions() {
        let app = Router::new()
            .route("/guarded", post(|| async { "ok" }))
            .route_layer(middleware::from_fn(require_manager))
            .layer(Extension(session_with_role(Role::Manager)));

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .method("POST")
                    .uri("/guarded")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn owner_gate_is_symmetric() {
        let app = Router::new()
            .route("/guarded", post(|| async { "ok" }))
            .route_layer(middleware::from_fn(require_owner))
            .layer(Extension(session_with_role(Role::Manager)));

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .method("POST")
                    .uri("/guarded")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
