// Handler tree, one module per screen:
// auth (public) -> directory / schedules / pages (session-gated)

pub mod auth;
pub mod directory;
pub mod pages;
pub mod schedules;
