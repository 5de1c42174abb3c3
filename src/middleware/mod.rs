pub mod auth;

pub use auth::{
    check_role, require_manager, require_owner, session_auth_middleware, SESSION_COOKIE,
};
