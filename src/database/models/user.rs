use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row in the `users` credential table. The password column holds a bcrypt
/// hash and is never serialized into a response.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: String,
}
