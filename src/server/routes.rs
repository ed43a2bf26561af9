use std::sync::Arc;

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::core::search::SearchOrchestrator;
use crate::domain::model::SearchResponse;
use crate::domain::ports::PlacesClient;
use crate::utils::error::{ErrorCategory, LeadError};

#[derive(Debug, Default, PartialEq)]
pub struct SearchParams {
    pub area: Option<String>,
    pub category: Option<String>,
}

impl SearchParams {
    /// Repeated keys keep their first value; unknown keys are ignored.
    pub fn from_query(query: Option<&str>) -> Self {
        let mut params = SearchParams::default();
        for (key, value) in url::form_urlencoded::parse(query.unwrap_or_default().as_bytes()) {
            let slot = match key.as_ref() {
                "area" => &mut params.area,
                "category" => &mut params.category,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        params
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Maps a search failure to its HTTP status and JSON error payload.
pub struct ApiError(pub LeadError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0.category() {
            ErrorCategory::Request => StatusCode::BAD_REQUEST,
            ErrorCategory::Configuration | ErrorCategory::Upstream | ErrorCategory::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorBody {
            error: self.0.user_friendly_message(),
        };
        (status, Json(body)).into_response()
    }
}

pub async fn search_handler<P: PlacesClient + 'static>(
    State(orchestrator): State<Arc<SearchOrchestrator<P>>>,
    RawQuery(query): RawQuery,
) -> Result<Json<SearchResponse>, ApiError> {
    let params = SearchParams::from_query(query.as_deref());
    let area = params.area.as_deref();
    let category = params.category.as_deref();

    match orchestrator.search(area, category).await {
        Ok(leads) => Ok(Json(SearchResponse { leads })),
        Err(e) => {
            match e.category() {
                ErrorCategory::Request => {
                    tracing::warn!(?area, ?category, "Rejected search: {}", e)
                }
                _ => tracing::error!(
                    ?area,
                    ?category,
                    retryable = e.is_retryable(),
                    "Search failed: {}",
                    e
                ),
            }
            Err(ApiError(e))
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    policy: String,
    registry_version: String,
}

pub async fn health_handler<P: PlacesClient + 'static>(
    State(orchestrator): State<Arc<SearchOrchestrator<P>>>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        policy: orchestrator.filter().to_string(),
        registry_version: orchestrator.engine().registry().version.clone(),
    })
}
