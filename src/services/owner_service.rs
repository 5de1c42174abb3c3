// Owner directory CRUD over the owners1 table.

use serde::Deserialize;
use sqlx::PgPool;

use crate::database::models::Owner;
use crate::error::ApiError;

/// The six caller-supplied owner fields. Secondary-owner names are optional;
/// no uniqueness or format validation is applied to contact info or email.
#[derive(Debug, Clone, Deserialize)]
pub struct OwnerFields {
    pub primary_first_name: String,
    pub primary_last_name: String,
    pub secondary_first_name: Option<String>,
    pub secondary_last_name: Option<String>,
    pub contact_info: String,
    pub email: String,
    pub notes: String,
}

#[derive(Clone)]
pub struct OwnerService {
    pool: PgPool,
}

impl OwnerService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List owners, all of them ordered by id when no term is given, or the
    /// subset whose four name fields match the term as a case-insensitive
    /// substring. No match is an empty list, never an error.
    pub async fn list(&self, search: Option<&str>) -> Result<Vec<Owner>, ApiError> {
        let owners = match search {
            Some(term) => {
                let pattern = format!("%{}%", term);
                sqlx::query_as::<_, Owner>(
                    "SELECT * FROM owners1 \
                     WHERE primaryownerfirstname ILIKE $1 \
                        OR primaryownerlastname ILIKE $1 \
                        OR secondaryownerfirstname ILIKE $1 \
                        OR secondaryownerlastname ILIKE $1 \
                     ORDER BY owner_id ASC",
                )
                .bind(pattern)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Owner>("SELECT * FROM owners1 ORDER BY owner_id ASC")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(owners)
    }

    pub async fn create(&self, fields: &OwnerFields) -> Result<Owner, ApiError> {
        let owner: Owner = sqlx::query_as(
            "INSERT INTO owners1 \
             (primaryownerfirstname, primaryownerlastname, secondaryownerfirstname, \
              secondaryownerlastname, contact_info, email, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(&fields.primary_first_name)
        .bind(&fields.primary_last_name)
        .bind(&fields.secondary_first_name)
        .bind(&fields.secondary_last_name)
        .bind(&fields.contact_info)
        .bind(&fields.email)
        .bind(&fields.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(owner)
    }

    /// Full overwrite of the six mutable fields by primary key. The affected
    /// row count is not checked; updating an absent id reports success.
    pub async fn update(&self, owner_id: i32, fields: &OwnerFields) -> Result<(), ApiError> {
        sqlx::query(
            "UPDATE owners1 SET \
             primaryownerfirstname = $1, primaryownerlastname = $2, \
             secondaryownerfirstname = $3, secondaryownerlastname = $4, \
             contact_info = $5, email = $6, notes = $7 \
             WHERE owner_id = $8",
        )
        .bind(&fields.primary_first_name)
        .bind(&fields.primary_last_name)
        .bind(&fields.secondary_first_name)
        .bind(&fields.secondary_last_name)
        .bind(&fields.contact_info)
        .bind(&fields.email)
        .bind(&fields.notes)
        .bind(owner_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Delete by primary key. Deleting an absent id is not an error.
    pub async fn delete(&self, owner_id: i32) -> Result<(), ApiError> {
        sqlx::query("DELETE FROM owners1 WHERE owner_id = $1")
            .bind(owner_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
