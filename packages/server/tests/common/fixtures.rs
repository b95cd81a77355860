//! Test fixtures for counselors and enquiries

use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

use server_core::domains::auth::password;
use server_core::domains::counselors::models::Counselor;
use server_core::domains::enquiries::models::Enquiry;

pub const TEST_PASSWORD: &str = "secret1";

/// Unique email per call; tests share one database.
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.com", prefix, Uuid::new_v4())
}

/// Insert a counselor with the fixture password already hashed.
pub async fn create_test_counselor(name: &str, email: &str, pool: &PgPool) -> Result<Counselor> {
    let hash = password::hash(TEST_PASSWORD)?;
    Counselor::insert(name, email, &hash, pool).await
}

/// Insert an unclaimed enquiry.
pub async fn create_test_enquiry(name: &str, pool: &PgPool) -> Result<Enquiry> {
    Enquiry::insert(name, &unique_email("lead"), "Rust systems programming", pool).await
}
