// handlers/directory/create.rs - POST /directory/add (manager only)

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::services::OwnerFields;
use crate::state::AppState;

pub async fn owner_create(
    State(state): State<AppState>,
    Json(fields): Json<OwnerFields>,
) -> Result<Json<Value>, ApiError> {
    let owner = state.owners.create(&fields).await?;

    tracing::info!("Created owner {} ({})", owner.owner_id, owner.display_name());
    Ok(Json(json!({
        "success": true,
        "message": "Owner added"
    })))
}
