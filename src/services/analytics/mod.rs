//! Analytics
//!
//! Aggregate statistics and CSV export over stored responses and answers.

pub mod aggregation;
pub mod export;
pub mod service;

pub use service::AnalyticsService;
