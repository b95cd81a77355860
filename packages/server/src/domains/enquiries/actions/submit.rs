//! Public enquiry submission action

use sqlx::PgPool;
use tracing::info;

use crate::common::validation::{validate_email, validate_name};
use crate::common::ApiError;
use crate::domains::enquiries::models::Enquiry;

/// Submit a new enquiry into the shared lead pool.
///
/// No authentication required; the record starts unclaimed with no owner.
pub async fn submit_enquiry(
    name: &str,
    email: &str,
    course_interest: &str,
    pool: &PgPool,
) -> Result<Enquiry, ApiError> {
    validate_name(name)?;
    validate_email(email)?;
    if course_interest.trim().is_empty() {
        return Err(ApiError::Validation(
            "Course interest cannot be empty".to_string(),
        ));
    }

    let enquiry = Enquiry::insert(name, email, course_interest, pool).await?;

    info!(enquiry_id = %enquiry.id, "Enquiry submitted");

    Ok(enquiry)
}
