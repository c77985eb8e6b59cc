pub mod config;
pub mod disputes;
pub mod error;
pub mod telemetry;
