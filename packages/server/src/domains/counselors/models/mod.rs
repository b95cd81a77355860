pub mod counselor;

pub use counselor::Counselor;
