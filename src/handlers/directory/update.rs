// handlers/directory/update.rs - POST /directory/edit/:id (manager only)

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::services::OwnerFields;
use crate::state::AppState;

/// Full overwrite of the six mutable owner fields. An id with no row behind
/// it still reports success.
pub async fn owner_update(
    State(state): State<AppState>,
    Path(owner_id): Path<i32>,
    Json(fields): Json<OwnerFields>,
) -> Result<Json<Value>, ApiError> {
    state.owners.update(owner_id, &fields).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Owner updated"
    })))
}
