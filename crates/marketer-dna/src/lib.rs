pub mod config;
pub mod diagnosis;
pub mod error;
pub mod quiz;
pub mod submissions;
pub mod telemetry;
