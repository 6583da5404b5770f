//! Database models for sessions.

use crate::types::{SessionId, UserId};
use chrono::{DateTime, Utc};

/// Database response for a session row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SessionDBResponse {
    pub id: SessionId,
    pub user_id: UserId,
    pub token: String,
    pub created_at: DateTime<Utc>,
}
