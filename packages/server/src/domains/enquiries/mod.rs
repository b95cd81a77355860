//! Enquiries domain - public lead submission and the claim workflow
//!
//! The claim transition is a single conditional update against the store;
//! the database row, not the service, is the synchronization point.

pub mod actions;
pub mod models;

pub use models::enquiry::{Enquiry, EnquiryWithCounselor};
