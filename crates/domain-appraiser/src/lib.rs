pub mod appraisal;
pub mod config;
pub mod error;
pub mod telemetry;
