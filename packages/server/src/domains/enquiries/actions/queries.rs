//! Enquiry query actions

use sqlx::PgPool;
use uuid::Uuid;

use crate::common::ApiError;
use crate::domains::enquiries::models::EnquiryWithCounselor;

/// The shared pool of unclaimed leads, visible identically to every
/// authenticated counselor. Most recent first.
pub async fn list_unclaimed(pool: &PgPool) -> Result<Vec<EnquiryWithCounselor>, ApiError> {
    Ok(EnquiryWithCounselor::find_unclaimed(pool).await?)
}

/// Leads claimed by the calling counselor. Most recent first.
pub async fn list_claimed_by(
    counselor_id: Uuid,
    pool: &PgPool,
) -> Result<Vec<EnquiryWithCounselor>, ApiError> {
    Ok(EnquiryWithCounselor::find_claimed_by(counselor_id, pool).await?)
}
