use std::sync::Arc;

use crate::adapters::GooglePlacesClient;
use crate::config::AppConfig;
use crate::core::classify::ClassificationEngine;
use crate::core::registry::Registry;
use crate::core::search::SearchOrchestrator;
use crate::utils::error::Result;

/// Wires registry, provider client and policy from a validated config.
///
/// A missing API key is not an error here: the server still starts and each
/// search reports the misconfiguration instead.
pub fn build_orchestrator(config: &AppConfig) -> Result<SearchOrchestrator<GooglePlacesClient>> {
    let registry = Registry::load(config.classification.registry_path.as_deref())?;
    tracing::info!(
        "Using registry {} ({} chain names, {} chain domains, {} SNS domains)",
        registry.version,
        registry.chain.name_fragments.len(),
        registry.chain.domain_fragments.len(),
        registry.sns.domains.len()
    );

    let api_key = config.provider.resolve_api_key();
    if api_key.is_none() {
        tracing::warn!(
            "{} is not set; searches will fail until it is configured",
            config.provider.api_key_env
        );
    }

    let client = GooglePlacesClient::new(&config.provider.endpoint, config.provider.timeout())?;
    let engine = ClassificationEngine::new(Arc::new(registry));

    Ok(SearchOrchestrator::new(
        client,
        engine,
        config.classification.policy,
        api_key,
        config.provider.api_key_env.clone(),
    ))
}
