// handlers/schedules/create.rs - POST /schedules/add (manager only)

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::services::ScheduleFields;
use crate::state::AppState;

pub async fn schedule_create(
    State(state): State<AppState>,
    Json(fields): Json<ScheduleFields>,
) -> Result<Json<Value>, ApiError> {
    let entry = state.schedules.create(&fields).await?;

    tracing::info!(
        "Created schedule entry {} for property {} ({} to {})",
        entry.schedule_id,
        entry.property_id,
        entry.start_date,
        entry.end_date
    );
    Ok(Json(json!({
        "success": true,
        "message": "Schedule entry added"
    })))
}
