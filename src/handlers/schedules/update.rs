// handlers/schedules/update.rs - POST /schedules/edit/:id (manager only)

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::services::ScheduleFields;
use crate::state::AppState;

/// Overwrites every schedule field by primary key. An id with no row behind
/// it still reports success.
pub async fn schedule_update(
    State(state): State<AppState>,
    Path(schedule_id): Path<i32>,
    Json(fields): Json<ScheduleFields>,
) -> Result<Json<Value>, ApiError> {
    state.schedules.update(schedule_id, &fields).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Schedule entry updated"
    })))
}
