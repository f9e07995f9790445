//! API handlers for the ClapMoney backend

pub mod analyze;

pub use analyze::{analyze_trade, method_not_allowed, preflight};
