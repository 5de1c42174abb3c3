use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row in the `schedule` table: a date range during which an owner occupies
/// a property. The owner column keeps its historical unprefixed name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Schedule {
    pub schedule_id: i32,
    pub property_id: i32,
    #[sqlx(rename = "ownerid")]
    pub owner_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
}

/// Occupancy row as presented to the schedule screen: the schedule entry
/// joined against its property and owner, with the owner name already
/// composed.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleRow {
    pub schedule_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub owner_id: i32,
    pub property_id: i32,
    pub owner_name: String,
    pub status: String,
}
