//! Curated fragment lists used by the classifiers.
//!
//! The lists are data, not logic: they live in a versioned TOML document that is
//! embedded as the built-in default and may be swapped for a file at startup.
//! Every fragment is lowercased on load so matching only lowercases the input.

use crate::utils::error::{LeadError, Result};
use serde::Deserialize;
use std::path::Path;

const BUILTIN_REGISTRY: &str = include_str!("../../data/registry.toml");

/// Chain/franchise brands, matched against place names and website URLs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChainRegistry {
    pub name_fragments: Vec<String>,
    pub domain_fragments: Vec<String>,
}

impl ChainRegistry {
    pub fn matches_name(&self, name: &str) -> bool {
        let lower_name = name.to_lowercase();
        self.name_fragments
            .iter()
            .any(|fragment| lower_name.contains(fragment.as_str()))
    }

    /// Containment is checked against the whole URL, not just its host.
    pub fn matches_url(&self, url: &str) -> bool {
        let lower_url = url.to_lowercase();
        self.domain_fragments
            .iter()
            .any(|fragment| lower_url.contains(fragment.as_str()))
    }
}

/// Social and listing platforms that do not count as an owned website.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SnsDomainList {
    pub domains: Vec<String>,
}

impl SnsDomainList {
    pub fn matches_url(&self, url: &str) -> bool {
        let lower_url = url.to_lowercase();
        self.domains
            .iter()
            .any(|domain| lower_url.contains(domain.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Registry {
    pub version: String,
    pub chain: ChainRegistry,
    pub sns: SnsDomainList,
}

impl Registry {
    /// The registry compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_REGISTRY)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LeadError::IoError)?;
        let registry = Self::from_toml_str(&content)?;
        tracing::info!(
            "Loaded registry {} from {}",
            registry.version,
            path.as_ref().display()
        );
        Ok(registry)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut registry: Registry =
            toml::from_str(content).map_err(|e| LeadError::RegistryError {
                message: format!("TOML parsing error: {}", e),
            })?;
        registry.normalize()?;
        Ok(registry)
    }

    /// Loads `path` when given, otherwise the built-in registry.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::builtin(),
        }
    }

    fn normalize(&mut self) -> Result<()> {
        normalize_fragments("chain.name_fragments", &mut self.chain.name_fragments)?;
        normalize_fragments("chain.domain_fragments", &mut self.chain.domain_fragments)?;
        normalize_fragments("sns.domains", &mut self.sns.domains)?;
        Ok(())
    }
}

// An empty fragment would match every input.
fn normalize_fragments(field: &str, fragments: &mut [String]) -> Result<()> {
    for fragment in fragments.iter_mut() {
        if fragment.is_empty() {
            return Err(LeadError::RegistryError {
                message: format!("{} contains an empty fragment", field),
            });
        }
        *fragment = fragment.to_lowercase();
    }
    Ok(())
}
