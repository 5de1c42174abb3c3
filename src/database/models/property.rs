use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Reference data: one row per resort property. Read-only here, populated
/// out of band.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Property {
    pub property_id: i32,
    pub property_name: String,
}
