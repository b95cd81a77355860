//! Enquiry actions - entry-point business logic
//!
//! Called directly from the HTTP handlers. Every action re-reads current
//! state from the store; nothing is cached across requests.

pub mod claim;
pub mod queries;
pub mod submit;

pub use claim::{claim_enquiry, ClaimOutcome};
pub use queries::{list_claimed_by, list_unclaimed};
pub use submit::submit_enquiry;
