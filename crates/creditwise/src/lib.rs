//! CreditWise: loan approval scoring over a pre-fitted classification bundle.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
