use sqlx::PgPool;

use crate::services::{OwnerService, ScheduleService};
use crate::session::SessionStore;

/// Application state constructed once at startup and injected into every
/// handler. The pool is the only store client in the process.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub sessions: SessionStore,
    pub owners: OwnerService,
    pub schedules: ScheduleService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            sessions: SessionStore::new(),
            owners: OwnerService::new(pool.clone()),
            schedules: ScheduleService::new(pool.clone()),
            db: pool,
        }
    }
}
