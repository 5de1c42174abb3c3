pub mod owner;
pub mod property;
pub mod schedule;
pub mod user;

pub use owner::{compose_owner_name, Owner};
pub use property::Property;
pub use schedule::{Schedule, ScheduleRow};
pub use user::User;
