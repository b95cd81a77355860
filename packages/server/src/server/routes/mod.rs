// HTTP routes
pub mod employees;
pub mod enquiries;
pub mod health;

pub use employees::*;
pub use enquiries::*;
pub use health::*;
