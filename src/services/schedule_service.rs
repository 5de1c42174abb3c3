// Schedule CRUD plus the joined occupancy view for one property at a time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::database::models::{compose_owner_name, Property, Schedule, ScheduleRow};
use crate::error::ApiError;

/// Caller-supplied schedule fields. Status is free-form text.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleFields {
    pub property_id: i32,
    pub owner_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
}

/// Entry for the owner selection control. The composed name is primary
/// first + last only; the secondary owner is deliberately not included here,
/// unlike the joined schedule rows.
#[derive(Debug, Clone, Serialize)]
pub struct OwnerOption {
    pub owner_id: i32,
    pub owner_name: String,
}

#[derive(Debug, FromRow)]
struct PickerRow {
    owner_id: i32,
    primaryownerfirstname: String,
    primaryownerlastname: String,
}

#[derive(Debug, FromRow)]
struct JoinedRow {
    schedule_id: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
    ownerid: i32,
    property_id: i32,
    primaryownerfirstname: String,
    primaryownerlastname: String,
    secondaryownerfirstname: Option<String>,
    secondaryownerlastname: Option<String>,
    status: String,
}

#[derive(Clone)]
pub struct ScheduleService {
    pool: PgPool,
}

impl ScheduleService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Property list feeding the selection control, ordered by name.
    pub async fn list_properties(&self) -> Result<Vec<Property>, ApiError> {
        let properties = sqlx::query_as::<_, Property>(
            "SELECT property_id, property_name FROM properties ORDER BY property_name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(properties)
    }

    pub async fn list_owners_for_picker(&self) -> Result<Vec<OwnerOption>, ApiError> {
        let rows = sqlx::query_as::<_, PickerRow>(
            "SELECT owner_id, primaryownerfirstname, primaryownerlastname \
             FROM owners1 ORDER BY owner_id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| OwnerOption {
                owner_id: r.owner_id,
                owner_name: format!("{} {}", r.primaryownerfirstname, r.primaryownerlastname),
            })
            .collect())
    }

    /// Occupancy rows for one property, ordered by start date. An empty
    /// selection returns an empty list without issuing the join.
    pub async fn schedule_for(&self, property_name: &str) -> Result<Vec<ScheduleRow>, ApiError> {
        if property_name.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, JoinedRow>(
            "SELECT s.schedule_id, s.start_date, s.end_date, s.ownerid, s.property_id, \
                    o.primaryownerfirstname, o.primaryownerlastname, \
                    o.secondaryownerfirstname, o.secondaryownerlastname, s.status \
             FROM schedule s \
             JOIN properties p ON s.property_id = p.property_id \
             JOIN owners1 o ON s.ownerid = o.owner_id \
             WHERE p.property_name = $1 \
             ORDER BY s.start_date ASC",
        )
        .bind(property_name)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| ScheduleRow {
                schedule_id: r.schedule_id,
                start_date: r.start_date,
                end_date: r.end_date,
                owner_id: r.ownerid,
                property_id: r.property_id,
                owner_name: compose_owner_name(
                    &r.primaryownerfirstname,
                    &r.primaryownerlastname,
                    r.secondaryownerfirstname.as_deref(),
                    r.secondaryownerlastname.as_deref(),
                ),
                status: r.status,
            })
            .collect())
    }

    pub async fn create(&self, fields: &ScheduleFields) -> Result<Schedule, ApiError> {
        validate_date_range(fields)?;

        let entry: Schedule = sqlx::query_as(
            "INSERT INTO schedule (property_id, ownerid, start_date, end_date, status) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING schedule_id, property_id, ownerid, start_date, end_date, status",
        )
        .bind(fields.property_id)
        .bind(fields.owner_id)
        .bind(fields.start_date)
        .bind(fields.end_date)
        .bind(&fields.status)
        .fetch_one(&self.pool)
        .await?;

        Ok(entry)
    }

    /// Overwrite all fields by primary key. The affected row count is not
    /// checked; updating an absent id reports success.
    pub async fn update(&self, schedule_id: i32, fields: &ScheduleFields) -> Result<(), ApiError> {
        validate_date_range(fields)?;

        sqlx::query(
            "UPDATE schedule SET property_id = $1, ownerid = $2, start_date = $3, \
             end_date = $4, status = $5 WHERE schedule_id = $6",
        )
        .bind(fields.property_id)
        .bind(fields.owner_id)
        .bind(fields.start_date)
        .bind(fields.end_date)
        .bind(&fields.status)
        .bind(schedule_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Delete by primary key. Deleting an absent id is not an error.
    pub async fn delete(&self, schedule_id: i32) -> Result<(), ApiError> {
        sqlx::query("DELETE FROM schedule WHERE schedule_id = $1")
            .bind(schedule_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// Overlapping bookings on the same property remain allowed.
fn validate_date_range(fields: &ScheduleFields) -> Result<(), ApiError> {
    if fields.start_date > fields.end_date {
        return Err(ApiError::validation("Start date must be on or before the end date"));
    }
    Ok(())
}
