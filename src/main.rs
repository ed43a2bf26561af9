use std::sync::Arc;

use clap::Parser;
use indie_leads::app::build_orchestrator;
use indie_leads::config::{AppConfig, LogFormat};
use indie_leads::server::{app::cors_layer, build_router, serve};
use indie_leads::utils::{logger, validation::Validate};
use indie_leads::CliConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let cli = CliConfig::parse();

    let mut config = match AppConfig::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", cli.config, e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };
    cli.apply_overrides(&mut config);

    match config.logging.format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(),
    }

    tracing::info!("Starting indie-leads server");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let orchestrator = match build_orchestrator(&config) {
        Ok(orchestrator) => Arc::new(orchestrator),
        Err(e) => {
            tracing::error!("❌ Startup failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };
    tracing::info!("Classification policy: {}", orchestrator.filter());

    let router = build_router(orchestrator, cors_layer(&config.server.allowed_origins)?);
    serve(router, &config.server.bind).await?;

    Ok(())
}
