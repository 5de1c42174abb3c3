// handlers/directory/list.rs - GET /directory

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::database::models::Owner;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DirectoryQuery {
    pub search: Option<String>,
}

/// One directory row as handed to the renderer: the owner record plus its
/// composed display name.
#[derive(Debug, Serialize)]
struct DirectoryEntry {
    #[serde(flatten)]
    owner: Owner,
    display_name: String,
}

/// GET /directory - the owner directory, optionally narrowed by a single
/// case-insensitive search term matched against all four name fields. An
/// empty term is treated as no term.
pub async fn directory_list(
    State(state): State<AppState>,
    Query(query): Query<DirectoryQuery>,
) -> Result<Json<Value>, ApiError> {
    let term = query.search.as_deref().filter(|s| !s.is_empty());
    let owners = state.owners.list(term).await?;

    let entries: Vec<DirectoryEntry> = owners
        .into_iter()
        .map(|owner| {
            let display_name = owner.display_name();
            DirectoryEntry { owner, display_name }
        })
        .collect();

    Ok(Json(json!({
        "success": true,
        "data": {
            "owners": entries,
            "search": query.search
        }
    })))
}
