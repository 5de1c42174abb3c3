pub mod login;
pub mod register;

pub use login::{login, login_form, logout};
pub use register::{manager_form, owner_form, register_manager, register_owner};
