use crate::core::ConfigProvider;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "calc-bridge")]
#[command(about = "Validates text inputs and runs factorial/sum through a pluggable compute module")]
pub struct CliConfig {
    #[arg(long, default_value = "5", help = "Integer to take the factorial of (0-20)")]
    pub number: String,

    #[arg(
        long,
        default_value = "1.0, 2.0, 3.0",
        help = "Comma-separated decimal numbers to sum"
    )]
    pub list: String,

    #[arg(long, default_value = "1000", help = "Simulated module load delay")]
    pub load_delay_ms: u64,

    #[arg(long, help = "Print the outcome as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn number_input(&self) -> &str {
        &self.number
    }

    fn list_input(&self) -> &str {
        &self.list
    }

    fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }
}
