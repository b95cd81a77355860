//! Auth domain - bearer-token identity for counselors
//!
//! Responsibilities:
//! - JWT issuance and stateless verification
//! - Password hashing and verification for the credential store

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtService};
