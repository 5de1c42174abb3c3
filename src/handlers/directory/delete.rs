// handlers/directory/delete.rs - POST /directory/delete/:id (manager only)

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn owner_delete(
    State(state): State<AppState>,
    Path(owner_id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    state.owners.delete(owner_id).await?;

    tracing::info!("Deleted owner {}", owner_id);
    Ok(Json(json!({
        "success": true,
        "message": "Owner deleted"
    })))
}
