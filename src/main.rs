use clap::Parser;
use valghenter::domain::ports::ConfigProvider;
use valghenter::utils::{logger, validation::Validate};
use valghenter::{ApiClient, CliConfig, HarvestEngine, Harvester, LocalStorage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting valghenter CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ Feil: {}", e);
        std::process::exit(1);
    }

    // The polling interval is accepted and clamped, but nothing schedules
    // repeat harvests yet.
    tracing::warn!(
        "⏱ Polling interval of {}s configured, but periodic refresh is not wired up; fetching once",
        config.effective_interval_secs()
    );

    let client = match ApiClient::new(&config.base_url()) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("❌ Invalid base URL: {}", e);
            eprintln!("❌ Feil: {}", e);
            std::process::exit(1);
        }
    };

    let harvester = Harvester::new(client);
    let storage = LocalStorage::new(config.output_path().to_string());
    let engine = HarvestEngine::new(harvester, storage, config);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Harvest completed");
            tracing::info!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Harvest failed: {} (upstream: {})", e, e.is_upstream());
            eprintln!("❌ Feil: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
