pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod session;
pub mod state;

use axum::extract::State;
use axum::http::StatusCode;
use axum::middleware as axum_middleware;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Assemble the application router around one explicitly constructed state.
pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(handlers::pages::landing))
        .route("/health", get(health))
        .merge(auth_routes())
        // Session-gated screens
        .merge(directory_routes(state.clone()))
        .merge(schedule_routes(state.clone()))
        .merge(page_routes(state.clone()))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn auth_routes() -> Router<AppState> {
    use handlers::auth;

    Router::new()
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/register/owner", get(auth::owner_form).post(auth::register_owner))
        .route("/register/manager", get(auth::manager_form).post(auth::register_manager))
}

fn directory_routes(state: AppState) -> Router<AppState> {
    use handlers::directory;

    // Writes are manager-only; the authentication layer wraps the role
    // layer, so an unauthenticated request never reaches the role check.
    let manager_only = Router::new()
        .route("/directory/add", post(directory::owner_create))
        .route("/directory/edit/:id", post(directory::owner_update))
        .route("/directory/delete/:id", post(directory::owner_delete))
        .route_layer(axum_middleware::from_fn(middleware::require_manager));

    Router::new()
        .route("/directory", get(directory::directory_list))
        .merge(manager_only)
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::session_auth_middleware,
        ))
}

fn schedule_routes(state: AppState) -> Router<AppState> {
    use handlers::schedules;

    let manager_only = Router::new()
        .route("/schedules/add", post(schedules::schedule_create))
        .route("/schedules/edit/:id", post(schedules::schedule_update))
        .route("/schedules/delete/:id", post(schedules::schedule_delete))
        .route_layer(axum_middleware::from_fn(middleware::require_manager));

    Router::new()
        .route("/schedules", get(schedules::schedules_view))
        .merge(manager_only)
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::session_auth_middleware,
        ))
}

fn page_routes(state: AppState) -> Router<AppState> {
    use handlers::pages;

    Router::new()
        .route("/exchange", get(pages::exchange_page).post(pages::exchange_submit))
        .route("/info", get(pages::info_page).post(pages::info_submit))
        .route("/feedback", get(pages::feedback_page).post(pages::feedback_submit))
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::session_auth_middleware,
        ))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match database::health_check(&state.db).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "success": false,
                "message": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
