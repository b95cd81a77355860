//! Lead claim action - first counselor to claim an unclaimed enquiry wins

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::common::ApiError;
use crate::domains::enquiries::models::{Enquiry, EnquiryWithCounselor};

/// Result of a claim attempt
#[derive(Debug)]
pub enum ClaimOutcome {
    /// The caller won the claim; record returned with owner resolved
    Claimed(EnquiryWithCounselor),
    /// Someone already owns this lead; the record reveals who
    AlreadyClaimed(Enquiry),
    /// No enquiry with that id
    NotFound,
}

/// Attempt to claim an enquiry for a counselor.
///
/// The unclaimed -> claimed transition is the conditional update in
/// [`Enquiry::claim_if_unclaimed`]; at most one caller ever gets the row
/// back, no matter how many race. A read-check-write sequence here would
/// admit two winners and must not be reintroduced.
pub async fn claim_enquiry(
    enquiry_id: Uuid,
    counselor_id: Uuid,
    pool: &PgPool,
) -> Result<ClaimOutcome, ApiError> {
    if let Some(claimed) = Enquiry::claim_if_unclaimed(enquiry_id, counselor_id, pool).await? {
        info!(enquiry_id = %claimed.id, counselor_id = %counselor_id, "Lead claimed");

        // Re-read with owner details resolved for the response.
        let with_counselor = EnquiryWithCounselor::find_by_id(enquiry_id, pool)
            .await?
            .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("Claimed enquiry vanished")))?;
        return Ok(ClaimOutcome::Claimed(with_counselor));
    }

    // Zero rows updated: either the record is missing or someone else won.
    // Claims are one-way, so this re-read cannot observe the row unclaimed.
    match Enquiry::find_by_id(enquiry_id, pool).await? {
        None => Ok(ClaimOutcome::NotFound),
        Some(enquiry) => Ok(ClaimOutcome::AlreadyClaimed(enquiry)),
    }
}
