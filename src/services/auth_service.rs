// Credential operations against the users table.

use bcrypt::{hash, verify};
use sqlx::PgPool;

use crate::config;
use crate::database::models::User;
use crate::error::ApiError;
use crate::session::Role;

/// Insert a new user with a bcrypt-hashed password. The username must be
/// unused; the check is an exact, case-sensitive match.
pub async fn register_user(
    pool: &PgPool,
    username: &str,
    password: &str,
    role: Role,
) -> Result<User, ApiError> {
    let existing: Option<(i32,)> = sqlx::query_as("SELECT id FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await?;

    if existing.is_some() {
        return Err(ApiError::validation("Username is already taken"));
    }

    let cost = config::config().security.bcrypt_cost;
    let password_hash = hash(password, cost)?;

    let user: User = sqlx::query_as(
        "INSERT INTO users (username, password, role) VALUES ($1, $2, $3) \
         RETURNING id, username, password, role",
    )
    .bind(username)
    .bind(&password_hash)
    .bind(role.as_str())
    .fetch_one(pool)
    .await?;

    tracing::info!("Registered user '{}' with role {}", user.username, user.role);
    Ok(user)
}

/// Look up a user by exact username and compare the password against the
/// stored bcrypt hash. Returns None identically for an unknown username and
/// a wrong password; callers must not distinguish the two.
pub async fn verify_user(
    pool: &PgPool,
    username: &str,
    password: &str,
) -> Result<Option<User>, ApiError> {
    let user: Option<User> =
        sqlx::query_as("SELECT id, username, password, role FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(pool)
            .await?;

    if let Some(user) = user {
        if verify(password, &user.password)? {
            return Ok(Some(user));
        }
    }
    Ok(None)
}
