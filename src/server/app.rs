//! Router construction and the serve loop.

use std::sync::Arc;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::core::search::SearchOrchestrator;
use crate::domain::ports::PlacesClient;
use crate::server::routes::{health_handler, search_handler};
use crate::utils::error::{LeadError, Result};

/// CORS policy for browser callers. An empty origin list allows any origin.
pub fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer> {
    let allow_origin = if allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        let origins = allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|e| LeadError::InvalidConfigValueError {
                    field: "server.allowed_origins".to_string(),
                    value: origin.clone(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET])
        .allow_headers([CONTENT_TYPE]))
}

/// Build the axum router around a shared orchestrator.
pub fn build_router<P: PlacesClient + 'static>(
    orchestrator: Arc<SearchOrchestrator<P>>,
    cors: CorsLayer,
) -> Router {
    let api = Router::new()
        .route("/search", get(search_handler::<P>))
        .layer(cors);

    Router::new()
        .nest("/api", api)
        .route("/health", get(health_handler::<P>))
        .layer(TraceLayer::new_for_http())
        .with_state(orchestrator)
}

pub async fn serve(router: Router, bind: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
