//! Utility helpers

pub mod timeout;

pub use timeout::with_timeout;
