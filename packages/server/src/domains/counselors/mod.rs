//! Counselors domain - employee registration and login

pub mod actions;
pub mod models;

pub use models::counselor::Counselor;
