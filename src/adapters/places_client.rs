use crate::domain::model::{PlaceRecord, SearchTextResponse};
use crate::domain::ports::{PlacesClient, TextSearch};
use crate::utils::error::{LeadError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://places.googleapis.com/v1/places:searchText";

const API_KEY_HEADER: &str = "X-Goog-Api-Key";
const FIELD_MASK_HEADER: &str = "X-Goog-FieldMask";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchTextBody<'a> {
    text_query: &'a str,
}

/// Client for the Places API (New) text-search endpoint.
#[derive(Debug, Clone)]
pub struct GooglePlacesClient {
    client: Client,
    endpoint: String,
}

impl GooglePlacesClient {
    /// With no timeout the reqwest default applies.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl PlacesClient for GooglePlacesClient {
    async fn search_text(&self, request: TextSearch<'_>) -> Result<Vec<PlaceRecord>> {
        tracing::debug!("Making Places API request to: {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, request.api_key)
            .header(FIELD_MASK_HEADER, request.field_mask)
            .json(&SearchTextBody {
                text_query: request.text_query,
            })
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Places API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LeadError::upstream(format!(
                "status {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        let bytes = response.bytes().await?;
        let parsed: SearchTextResponse = serde_json::from_slice(&bytes)
            .map_err(|e| LeadError::upstream(format!("malformed response body: {}", e)))?;

        tracing::debug!("Places API returned {} places", parsed.places.len());
        Ok(parsed.places)
    }
}
