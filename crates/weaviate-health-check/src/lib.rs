pub mod cli;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod outcome;
pub mod telemetry;

pub use config::CheckConfig;
pub use error::CheckError;
pub use evaluator::{evaluate, reduce, run, run_with};
pub use outcome::{CheckOutcome, CheckState};

/// Name printed in front of every result line.
pub const PLUGIN_NAME: &str = "sensu-weaviate-health";
