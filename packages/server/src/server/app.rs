//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware,
    routing::{get, patch, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domains::auth::JwtService;
use crate::server::middleware::jwt_auth_middleware;
use crate::server::routes::{
    claim_enquiry_handler, health_handler, list_private_enquiries_handler,
    list_public_enquiries_handler, login_handler, register_handler, submit_enquiry_handler,
};

/// Shared application state
///
/// The pool and the token-signing key are the only process-wide state; both
/// are initialized once at startup and never mutated afterward.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub jwt_service: Arc<JwtService>,
}

/// Build the Axum application router
pub fn build_app(pool: PgPool, jwt_secret: &str, jwt_issuer: String) -> Router {
    let jwt_service = Arc::new(JwtService::new(jwt_secret, jwt_issuer));

    let app_state = AppState {
        db_pool: pool,
        jwt_service: jwt_service.clone(),
    };

    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    // Clone jwt_service for middleware closure
    let jwt_service_for_middleware = jwt_service.clone();

    Router::new()
        // Employee endpoints (public)
        .route("/api/employees/register", post(register_handler))
        .route("/api/employees/login", post(login_handler))
        // Enquiry endpoints; GET on /public and everything below requires a
        // bearer token, enforced by the AuthUser extractor
        .route(
            "/api/enquiries/public",
            post(submit_enquiry_handler).get(list_public_enquiries_handler),
        )
        .route("/api/enquiries/private", get(list_private_enquiries_handler))
        .route("/api/enquiries/:id/claim", patch(claim_enquiry_handler))
        // Health check
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(move |req, next| {
            jwt_auth_middleware(jwt_service_for_middleware.clone(), req, next)
        }))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
