//! Counselor actions - entry-point business logic
//!
//! Called directly from the HTTP handlers. Actions are self-contained: they
//! validate input, talk to the store, and return final models/results.

pub mod login;
pub mod register;

pub use login::login_counselor;
pub use register::register_counselor;
