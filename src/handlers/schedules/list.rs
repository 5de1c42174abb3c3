// handlers/schedules/list.rs - GET /schedules

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SchedulesQuery {
    pub property_name: Option<String>,
}

/// GET /schedules - the schedule screen's view model: the property list for
/// the selection control, the owner picker, and the occupancy rows for the
/// selected property. With nothing selected the rows are empty and the
/// schedule join is never issued.
pub async fn schedules_view(
    State(state): State<AppState>,
    Query(query): Query<SchedulesQuery>,
) -> Result<Json<Value>, ApiError> {
    let selected = query.property_name.unwrap_or_default();

    let properties = state.schedules.list_properties().await?;
    let owners = state.schedules.list_owners_for_picker().await?;
    let rows = state.schedules.schedule_for(&selected).await?;

    Ok(Json(json!({
        "success": true,
        "data": {
            "properties": properties,
            "owners": owners,
            "selected_property": selected,
            "schedule": rows
        }
    })))
}
