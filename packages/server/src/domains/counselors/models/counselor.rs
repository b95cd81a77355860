use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Counselor model - SQL persistence layer
///
/// password_hash is a PHC-format Argon2id string; it never appears in API
/// responses or logs.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Counselor {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Counselor {
    /// Find counselor by ID
    pub async fn find_by_id(id: Uuid, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM counselors WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Find counselor by email (case-insensitive)
    pub async fn find_by_email(email: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM counselors WHERE lower(email) = lower($1)")
            .bind(email)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Insert a new counselor
    ///
    /// Duplicate emails are rejected by the unique index on lower(email);
    /// callers inspect the error with [`Counselor::is_duplicate_email`].
    pub async fn insert(
        name: &str,
        email: &str,
        password_hash: &str,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO counselors (name, email, password_hash)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Whether an insert error is the unique-email violation
    pub fn is_duplicate_email(error: &anyhow::Error) -> bool {
        error
            .downcast_ref::<sqlx::Error>()
            .and_then(|e| e.as_database_error())
            .is_some_and(|db| db.is_unique_violation())
    }
}
