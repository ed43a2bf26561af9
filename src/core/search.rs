use crate::core::classify::ClassificationEngine;
use crate::core::filter::LeadFilter;
use crate::domain::model::Lead;
use crate::domain::ports::{PlacesClient, TextSearch};
use crate::utils::error::{LeadError, Result};
use crate::utils::validation::require_param;

pub struct SearchOrchestrator<P: PlacesClient> {
    client: P,
    engine: ClassificationEngine,
    filter: LeadFilter,
    api_key: Option<String>,
    api_key_name: String,
}

impl<P: PlacesClient> SearchOrchestrator<P> {
    /// `api_key_name` is only used in error messages when `api_key` is absent.
    pub fn new(
        client: P,
        engine: ClassificationEngine,
        filter: LeadFilter,
        api_key: Option<String>,
        api_key_name: impl Into<String>,
    ) -> Self {
        Self {
            client,
            engine,
            filter,
            api_key: api_key.filter(|key| !key.is_empty()),
            api_key_name: api_key_name.into(),
        }
    }

    pub fn filter(&self) -> LeadFilter {
        self.filter
    }

    pub fn engine(&self) -> &ClassificationEngine {
        &self.engine
    }

    pub async fn search(&self, area: Option<&str>, category: Option<&str>) -> Result<Vec<Lead>> {
        let area = require_param("area", area)?;
        let category = require_param("category", category)?;

        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| LeadError::MissingCredential {
                name: self.api_key_name.clone(),
            })?;

        let text_query = format!("{} {}", area, category);
        tracing::debug!(
            "Searching places for '{}' with policy {}",
            text_query,
            self.filter
        );

        let places = self
            .client
            .search_text(TextSearch {
                text_query: &text_query,
                api_key,
                field_mask: self.filter.field_mask(),
            })
            .await?;

        let total = places.len();
        let leads: Vec<Lead> = places
            .iter()
            .filter_map(|place| self.filter.apply(&self.engine, place, category))
            .collect();

        tracing::info!(
            area,
            category,
            policy = %self.filter,
            "Kept {} of {} places as leads",
            leads.len(),
            total
        );

        Ok(leads)
    }
}
