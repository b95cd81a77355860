//! Counselor registration action

use sqlx::PgPool;
use tracing::info;

use crate::common::validation::{validate_email, validate_name, validate_password};
use crate::common::ApiError;
use crate::domains::auth::password;
use crate::domains::counselors::models::Counselor;

/// Register a new counselor.
///
/// The duplicate-email check is the unique index on lower(email), not a prior
/// lookup: two concurrent registrations with the same email race to a single
/// winner at the store.
pub async fn register_counselor(
    name: &str,
    email: &str,
    plaintext_password: &str,
    pool: &PgPool,
) -> Result<Counselor, ApiError> {
    validate_name(name)?;
    validate_email(email)?;
    validate_password(plaintext_password)?;

    let password_hash = password::hash(plaintext_password)?;

    let counselor = match Counselor::insert(name, email, &password_hash, pool).await {
        Ok(counselor) => counselor,
        Err(e) if Counselor::is_duplicate_email(&e) => return Err(ApiError::DuplicateEmail),
        Err(e) => return Err(ApiError::Internal(e)),
    };

    info!(counselor_id = %counselor.id, "Counselor registered");

    Ok(counselor)
}
