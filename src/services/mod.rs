//! Business logic services for the ClapMoney backend

mod analysis;

pub use analysis::AnalysisService;
