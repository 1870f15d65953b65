//! User repository implementation.

use sqlx::PgPool;

use lectern_core::error::{AppError, ErrorKind};
use lectern_core::result::AppResult;
use lectern_entity::user::User;

/// Repository for the user audience table.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a user or refresh their username and last-seen timestamp.
    pub async fn upsert(&self, user_id: i64, username: Option<&str>) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO users (user_id, username) VALUES ($1, $2) \
             ON CONFLICT (user_id) DO UPDATE SET \
                 username = EXCLUDED.username, \
                 last_seen = NOW()",
        )
        .bind(user_id)
        .bind(username)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to upsert user", e))?;
        Ok(())
    }

    /// All known user IDs.
    pub async fn all_ids(&self) -> AppResult<Vec<i64>> {
        sqlx::query_scalar::<_, i64>("SELECT user_id FROM users")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list user ids", e))
    }

    /// Count total users.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))
    }

    /// All user rows, for export.
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY user_id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }
}
