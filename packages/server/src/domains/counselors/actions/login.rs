//! Counselor login action

use sqlx::PgPool;
use tracing::info;

use crate::common::ApiError;
use crate::domains::auth::password;
use crate::domains::counselors::models::Counselor;

/// Verify a counselor's credentials.
///
/// Unknown email and wrong password collapse into the same rejection so the
/// response does not reveal which accounts exist.
pub async fn login_counselor(
    email: &str,
    plaintext_password: &str,
    pool: &PgPool,
) -> Result<Counselor, ApiError> {
    let counselor = Counselor::find_by_email(email, pool)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    if !password::verify(plaintext_password, &counselor.password_hash)? {
        return Err(ApiError::InvalidCredentials);
    }

    info!(counselor_id = %counselor.id, "Counselor logged in");

    Ok(counselor)
}
