// handlers/schedules/delete.rs - POST /schedules/delete/:id (manager only)

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn schedule_delete(
    State(state): State<AppState>,
    Path(schedule_id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    state.schedules.delete(schedule_id).await?;

    tracing::info!("Deleted schedule entry {}", schedule_id);
    Ok(Json(json!({
        "success": true,
        "message": "Schedule entry deleted"
    })))
}
