use anyhow::Context;
use clap::Parser;
use indie_leads::app::build_orchestrator;
use indie_leads::config::AppConfig;
use indie_leads::domain::model::SearchResponse;
use indie_leads::utils::{logger, validation::Validate};
use indie_leads::LeadFilter;

#[derive(Parser)]
#[command(name = "lead-lookup")]
#[command(about = "Run a single lead search and print the JSON response")]
struct Args {
    /// Area to search, e.g. 鎌倉
    #[arg(short, long)]
    area: String,

    /// Business category, e.g. カフェ
    #[arg(short = 't', long)]
    category: String,

    /// Path to TOML configuration file
    #[arg(short, long, default_value = "leads-config.toml")]
    config: String,

    /// Override classification.policy from config
    #[arg(long)]
    policy: Option<LeadFilter>,

    /// Show the query and field mask without calling the provider
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let mut config = AppConfig::load_or_default(&args.config)
        .with_context(|| format!("failed to load config file '{}'", args.config))?;
    if let Some(policy) = args.policy {
        config.classification.policy = policy;
    }
    config.validate()?;

    if args.dry_run {
        let policy = config.classification.policy;
        println!("🔍 DRY RUN - no request will be sent");
        println!("   Endpoint:   {}", config.provider.endpoint);
        println!("   Query:      {} {}", args.area, args.category);
        println!("   Policy:     {}", policy);
        println!("   Field mask: {}", policy.field_mask());
        println!(
            "   API key:    {}",
            if config.provider.resolve_api_key().is_some() {
                "configured"
            } else {
                "missing"
            }
        );
        return Ok(());
    }

    let orchestrator = build_orchestrator(&config)?;
    match orchestrator
        .search(Some(args.area.as_str()), Some(args.category.as_str()))
        .await
    {
        Ok(leads) => {
            let response = SearchResponse { leads };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Err(e) => {
            tracing::error!("❌ Search failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(if e.is_retryable() { 2 } else { 1 });
        }
    }

    Ok(())
}
