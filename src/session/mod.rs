// In-process session store backing the authorization checks.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config;

/// User role, fixed at registration and snapshotted into the session at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Manager,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Manager => "manager",
        }
    }

    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "owner" => Some(Role::Owner),
            "manager" => Some(Role::Manager),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated-user snapshot embedded in the session at login time.
/// Invariant: never refreshed from the users table afterward, so the role
/// can go stale relative to the store until the next login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i32,
    pub username: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub user: SessionUser,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Process-wide session store. Shared across concurrent requests with no
/// per-session lock; concurrent mutations are last-write-wins.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a session for an authenticated user with the configured TTL.
    pub async fn create(&self, user: SessionUser) -> Session {
        let ttl = Duration::hours(config::config().security.session_ttl_hours);
        self.create_with_ttl(user, ttl).await
    }

    pub async fn create_with_ttl(&self, user: SessionUser, ttl: Duration) -> Session {
        let now = Utc::now();
        let session = Session {
            id: Uuid::new_v4(),
            user,
            created_at: now,
            expires_at: now + ttl,
        };

        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id, session.clone());
        session
    }

    /// Resolve a session id to a live session. Expired entries are dropped
    /// on the way out rather than by a background sweeper.
    pub async fn resolve(&self, id: Uuid) -> Option<Session> {
        {
            let sessions = self.sessions.read().await;
            match sessions.get(&id) {
                Some(session) if !session.is_expired() => return Some(session.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        // Expired: remove under the write lock
        let mut sessions = self.sessions.write().await;
        sessions.remove(&id);
        None
    }

    /// Destroy a session. Destroying an id that does not exist is not an error.
    pub async fn destroy(&self, id: Uuid) {
        let mut sessions = self.sessions.write().await;
        sessions.remove(&id);
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
