pub mod toml_config;

pub use toml_config::{AppConfig, LogFormat};

#[cfg(feature = "cli")]
use crate::core::filter::LeadFilter;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "indie-leads")]
#[command(about = "Lead lookup API for independent businesses without their own website")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "leads-config.toml")]
    pub config: String,

    /// Override server.bind from config
    #[arg(long)]
    pub bind: Option<String>,

    /// Override classification.policy from config
    #[arg(long)]
    pub policy: Option<LeadFilter>,

    /// Override classification.registry_path from config
    #[arg(long)]
    pub registry: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(bind) = &self.bind {
            config.server.bind = bind.clone();
        }
        if let Some(policy) = self.policy {
            config.classification.policy = policy;
        }
        if let Some(registry) = &self.registry {
            config.classification.registry_path = Some(registry.clone());
        }
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let cli = CliConfig::parse_from([
            "indie-leads",
            "--bind",
            "127.0.0.1:9999",
            "--policy",
            "website_status",
        ]);
        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.server.bind, "127.0.0.1:9999");
        assert_eq!(config.classification.policy, LeadFilter::WebsiteStatus);
        assert!(config.classification.registry_path.is_none());
    }
}
