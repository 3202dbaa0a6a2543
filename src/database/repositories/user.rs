//! User repository implementation

use chrono::Utc;
use sqlx::PgPool;

use crate::models::user::{CreateUserRequest, User};
use crate::utils::errors::LotteError;

#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, LotteError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, created_at, updated_at)
            VALUES ($1, $2, $3, $3)
            RETURNING id, username, email, is_active, created_at, updated_at
            "#,
        )
        .bind(request.username)
        .bind(request.email)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, LotteError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, is_active, created_at, updated_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find user by username
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, LotteError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, is_active, created_at, updated_at FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Activate or deactivate a user
    pub async fn set_active(&self, id: i64, is_active: bool) -> Result<User, LotteError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET is_active = $2, updated_at = $3
            WHERE id = $1
            RETURNING id, username, email, is_active, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(is_active)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }
}
