use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Enquiry (lead) model - SQL persistence layer
///
/// Invariant: claimed == false <=> counselor_id IS NULL. Both columns are
/// only ever written together, by [`Enquiry::claim_if_unclaimed`].
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Enquiry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub course_interest: String,
    pub claimed: bool,
    pub counselor_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Enquiry row with its owning counselor resolved (LEFT JOIN)
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct EnquiryWithCounselor {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub course_interest: String,
    pub claimed: bool,
    pub counselor_id: Option<Uuid>,
    pub counselor_name: Option<String>,
    pub counselor_email: Option<String>,
    pub created_at: DateTime<Utc>,
}

const WITH_COUNSELOR_SELECT: &str = "SELECT e.id, e.name, e.email, e.course_interest,
            e.claimed, e.counselor_id,
            c.name AS counselor_name, c.email AS counselor_email,
            e.created_at
     FROM enquiries e
     LEFT JOIN counselors c ON c.id = e.counselor_id";

impl Enquiry {
    /// Insert a new unclaimed enquiry
    pub async fn insert(
        name: &str,
        email: &str,
        course_interest: &str,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO enquiries (name, email, course_interest, claimed, counselor_id)
             VALUES ($1, $2, $3, false, NULL)
             RETURNING *",
        )
        .bind(name)
        .bind(email)
        .bind(course_interest)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Find enquiry by ID
    pub async fn find_by_id(id: Uuid, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM enquiries WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Atomically claim an unclaimed enquiry for a counselor
    ///
    /// The WHERE clause carries the claimed=false condition, so concurrent
    /// claims on the same row serialize at the store and at most one caller
    /// gets the updated row back. Returns None when the row does not exist
    /// or was already claimed; callers re-read to tell those apart.
    pub async fn claim_if_unclaimed(
        id: Uuid,
        counselor_id: Uuid,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "UPDATE enquiries
             SET claimed = true, counselor_id = $2, updated_at = now()
             WHERE id = $1
               AND claimed = false
             RETURNING *",
        )
        .bind(id)
        .bind(counselor_id)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }
}

impl EnquiryWithCounselor {
    /// Find enquiry by ID with its counselor resolved
    pub async fn find_by_id(id: Uuid, pool: &PgPool) -> Result<Option<Self>> {
        let sql = format!("{} WHERE e.id = $1", WITH_COUNSELOR_SELECT);
        sqlx::query_as::<_, Self>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// All unclaimed enquiries, most recent first (the shared lead pool)
    pub async fn find_unclaimed(pool: &PgPool) -> Result<Vec<Self>> {
        let sql = format!(
            "{} WHERE e.claimed = false ORDER BY e.created_at DESC",
            WITH_COUNSELOR_SELECT
        );
        sqlx::query_as::<_, Self>(&sql)
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Enquiries claimed by one counselor, most recent first
    pub async fn find_claimed_by(counselor_id: Uuid, pool: &PgPool) -> Result<Vec<Self>> {
        let sql = format!(
            "{} WHERE e.claimed = true AND e.counselor_id = $1 ORDER BY e.created_at DESC",
            WITH_COUNSELOR_SELECT
        );
        sqlx::query_as::<_, Self>(&sql)
            .bind(counselor_id)
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }
}
