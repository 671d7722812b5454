pub mod analytics;
pub mod comparison;
pub mod config;
pub mod error;
pub mod filter;
pub mod metrics;
pub mod query;
