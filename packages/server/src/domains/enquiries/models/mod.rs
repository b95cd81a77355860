pub mod enquiry;

pub use enquiry::{Enquiry, EnquiryWithCounselor};
