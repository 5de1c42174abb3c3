pub mod auth_service;
pub mod owner_service;
pub mod schedule_service;

pub use owner_service::{OwnerFields, OwnerService};
pub use schedule_service::{OwnerOption, ScheduleFields, ScheduleService};
