use calc_bridge::core::engine;
use calc_bridge::utils::logger;
use calc_bridge::{CliConfig, Outcome};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting calc-bridge");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let outcome = engine::run_once(&config).await;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        match &outcome {
            Outcome::Ready(_) => println!("✅ {}", outcome),
            Outcome::Failed { .. } => eprintln!("❌ {}", outcome),
        }
    }

    if !outcome.is_ready() {
        std::process::exit(1);
    }

    Ok(())
}
