//! Enquiry routes - public submission, lead pool listings, and claiming

use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::ApiError;
use crate::domains::enquiries::actions::{
    claim_enquiry, list_claimed_by, list_unclaimed, submit_enquiry, ClaimOutcome,
};
use crate::domains::enquiries::models::{Enquiry, EnquiryWithCounselor};
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitEnquiryRequest {
    name: Option<String>,
    email: Option<String>,
    course_interest: Option<String>,
}

fn enquiry_json(enquiry: &Enquiry) -> Value {
    json!({
        "id": enquiry.id,
        "name": enquiry.name,
        "email": enquiry.email,
        "courseInterest": enquiry.course_interest,
        "claimed": enquiry.claimed,
        "counselorId": enquiry.counselor_id,
        "createdAt": enquiry.created_at,
    })
}

fn enquiry_with_counselor_json(enquiry: &EnquiryWithCounselor) -> Value {
    json!({
        "id": enquiry.id,
        "name": enquiry.name,
        "email": enquiry.email,
        "courseInterest": enquiry.course_interest,
        "claimed": enquiry.claimed,
        "counselorId": enquiry.counselor_id,
        "counselor": enquiry.counselor_id.map(|id| json!({
            "id": id,
            "name": enquiry.counselor_name,
            "email": enquiry.counselor_email,
        })),
        "createdAt": enquiry.created_at,
    })
}

/// POST /api/enquiries/public
///
/// Public route - no authentication required
pub async fn submit_enquiry_handler(
    Extension(state): Extension<AppState>,
    Json(body): Json<SubmitEnquiryRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let (name, email, course_interest) = match (
        body.name.as_deref().filter(|s| !s.trim().is_empty()),
        body.email.as_deref().filter(|s| !s.trim().is_empty()),
        body.course_interest.as_deref().filter(|s| !s.trim().is_empty()),
    ) {
        (Some(name), Some(email), Some(course_interest)) => (name, email, course_interest),
        _ => {
            return Err(ApiError::Validation(
                "Please provide name, email, and courseInterest".to_string(),
            ))
        }
    };

    let enquiry = submit_enquiry(name, email, course_interest, &state.db_pool).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Enquiry submitted successfully",
            "enquiry": enquiry_json(&enquiry),
        })),
    ))
}

/// GET /api/enquiries/public
///
/// Protected route - returns the shared pool of unclaimed leads
pub async fn list_public_enquiries_handler(
    _user: AuthUser,
    Extension(state): Extension<AppState>,
) -> Result<Json<Value>, ApiError> {
    let enquiries = list_unclaimed(&state.db_pool).await?;

    Ok(Json(json!({
        "message": "Public enquiries retrieved successfully",
        "count": enquiries.len(),
        "enquiries": enquiries.iter().map(enquiry_with_counselor_json).collect::<Vec<_>>(),
    })))
}

/// GET /api/enquiries/private
///
/// Protected route - returns the leads claimed by the calling counselor
pub async fn list_private_enquiries_handler(
    user: AuthUser,
    Extension(state): Extension<AppState>,
) -> Result<Json<Value>, ApiError> {
    let enquiries = list_claimed_by(user.counselor_id, &state.db_pool).await?;

    Ok(Json(json!({
        "message": "Private enquiries retrieved successfully",
        "count": enquiries.len(),
        "enquiries": enquiries.iter().map(enquiry_with_counselor_json).collect::<Vec<_>>(),
    })))
}

/// PATCH /api/enquiries/:id/claim
///
/// Protected route - first counselor to claim an unclaimed lead wins; the
/// 409 body names the current owner so the caller knows who did.
pub async fn claim_enquiry_handler(
    user: AuthUser,
    Extension(state): Extension<AppState>,
    Path(enquiry_id): Path<Uuid>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    match claim_enquiry(enquiry_id, user.counselor_id, &state.db_pool).await? {
        ClaimOutcome::Claimed(enquiry) => Ok((
            StatusCode::OK,
            Json(json!({
                "message": "Lead claimed successfully",
                "enquiry": enquiry_with_counselor_json(&enquiry),
            })),
        )),
        ClaimOutcome::AlreadyClaimed(enquiry) => Ok((
            StatusCode::CONFLICT,
            Json(json!({
                "message": "This lead has already been claimed by another counselor",
                "enquiry": {
                    "id": enquiry.id,
                    "name": enquiry.name,
                    "email": enquiry.email,
                    "claimed": enquiry.claimed,
                    "claimedBy": enquiry.counselor_id,
                },
            })),
        )),
        ClaimOutcome::NotFound => Err(ApiError::NotFound("Enquiry not found".to_string())),
    }
}
