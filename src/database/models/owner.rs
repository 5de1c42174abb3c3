use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row in the `owners1` directory table. The column names carry their
/// historical spellings; the struct exposes readable field names.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Owner {
    pub owner_id: i32,
    #[sqlx(rename = "primaryownerfirstname")]
    pub primary_first_name: String,
    #[sqlx(rename = "primaryownerlastname")]
    pub primary_last_name: String,
    #[sqlx(rename = "secondaryownerfirstname")]
    pub secondary_first_name: Option<String>,
    #[sqlx(rename = "secondaryownerlastname")]
    pub secondary_last_name: Option<String>,
    pub contact_info: String,
    pub email: String,
    pub notes: String,
}

impl Owner {
    /// Display name for directory listings and schedule rows.
    pub fn display_name(&self) -> String {
        compose_owner_name(
            &self.primary_first_name,
            &self.primary_last_name,
            self.secondary_first_name.as_deref(),
            self.secondary_last_name.as_deref(),
        )
    }

}

/// Compose "First Last", appending " and SecondaryFirst SecondaryLast" only
/// when at least one secondary field is non-null and non-empty. Empty-string
/// sub-fields keep their separating space.
pub fn compose_owner_name(
    first: &str,
    last: &str,
    secondary_first: Option<&str>,
    secondary_last: Option<&str>,
) -> String {
    let primary = format!("{} {}", first, last);

    if has_content(secondary_first) || has_content(secondary_last) {
        format!(
            "{} and {} {}",
            primary,
            secondary_first.unwrap_or(""),
            secondary_last.unwrap_or("")
        )
    } else {
        primary
    }
}

fn has_content(field: Option<&str>) -> bool {
    field.map_or(false, |s| !s.is_empty())
}
