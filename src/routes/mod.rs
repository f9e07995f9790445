//! Route definitions for the ClapMoney API

mod analyze;

pub use analyze::analyze_routes;
