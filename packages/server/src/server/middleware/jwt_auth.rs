use crate::common::ApiError;
use crate::domains::auth::JwtService;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::{middleware::Next, response::Response};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Authenticated counselor identity resolved from the bearer token
///
/// Lives in the request extensions for the duration of that request only.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub counselor_id: Uuid,
}

/// Why token extraction failed, kept for the 401 diagnostic
#[derive(Clone, Copy, Debug)]
pub struct AuthRejection(pub &'static str);

/// JWT authentication middleware
///
/// Extracts the bearer token from the Authorization header, verifies it, and
/// adds AuthUser to request extensions. Runs on every route; it never rejects
/// by itself, so public routes keep working. Protected handlers reject via
/// the [`AuthUser`] extractor.
pub async fn jwt_auth_middleware(
    jwt_service: Arc<JwtService>,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    match extract_auth_user(&request, &jwt_service) {
        Ok(user) => {
            debug!(counselor_id = %user.counselor_id, "Authenticated counselor");
            request.extensions_mut().insert(user);
        }
        Err(reason) => {
            debug!(reason, "No valid authentication token");
            request.extensions_mut().insert(AuthRejection(reason));
        }
    }

    next.run(request).await
}

/// Extract and verify the bearer token from a request
fn extract_auth_user(
    request: &axum::http::Request<axum::body::Body>,
    jwt_service: &JwtService,
) -> Result<AuthUser, &'static str> {
    let auth_header = request
        .headers()
        .get("authorization")
        .ok_or("no token provided")?;
    let auth_str = auth_header
        .to_str()
        .map_err(|_| "malformed authorization header")?;

    // Format: "Bearer <token>"
    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or("malformed authorization header")?;

    let claims = jwt_service
        .verify_token(token)
        .map_err(|_| "token failed")?;

    Ok(AuthUser {
        counselor_id: claims.counselor_id,
    })
}

/// Rejecting extractor: protected handlers declare `user: AuthUser`, so an
/// unauthenticated request gets its 401 before the handler body runs.
#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(user.clone());
        }

        let reason = parts
            .extensions
            .get::<AuthRejection>()
            .map(|r| r.0)
            .unwrap_or("no token provided");
        Err(ApiError::Unauthenticated(reason))
    }
}
