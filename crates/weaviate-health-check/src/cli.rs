use std::time::Duration;

use clap::Parser;

use crate::config::CheckConfig;
use crate::telemetry::LogFormat;

#[derive(Debug, Parser)]
#[command(
    name = "sensu-weaviate-health",
    about = "Basic Check for Weaviate using REST"
)]
pub struct Cli {
    /// URL of your Weaviate instance, e.g. http://localhost:8080
    #[arg(short, long, env = "WEAVIATE_URL", default_value = "")]
    pub url: String,

    /// Request timeout in seconds. Unset uses the HTTP client default.
    #[arg(long, env = "WEAVIATE_TIMEOUT")]
    pub timeout: Option<u64>,

    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Cli {
    pub fn config(&self) -> CheckConfig {
        let config = CheckConfig::new(self.url.clone());
        match self.timeout {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        }
    }
}
