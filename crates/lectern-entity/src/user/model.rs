//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user tracked for broadcast audience and statistics.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// External chat-platform user ID.
    pub user_id: i64,
    /// Last known username, if any.
    pub username: Option<String>,
    /// First recorded interaction.
    pub first_seen: DateTime<Utc>,
    /// Refreshed on every recorded interaction.
    pub last_seen: DateTime<Utc>,
}
