//! Middleware for the ClapMoney API

mod tracing;

pub use tracing::request_tracing;
