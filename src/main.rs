use clap::Parser;
use gadget_points::utils::{logger, validation::Validate};
use gadget_points::{CliConfig, LoyaltyAccount, ScenarioEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting gadget-points");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let account = LoyaltyAccount::new();
    let engine = ScenarioEngine::new(account, config);

    match engine.run().await {
        Ok(card) => {
            println!("Points: {}", card.points);
            println!("Redemptions: {}", card.redemptions);
        }
        Err(e) => {
            tracing::error!("Loyalty task batch failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
