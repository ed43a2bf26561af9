use axum::body::Body;
use axum::http::{Request, StatusCode};
use httpmock::prelude::*;
use indie_leads::server::{app::cors_layer, build_router};
use indie_leads::{ClassificationEngine, GooglePlacesClient, LeadFilter, Registry, SearchOrchestrator};
use std::io::Write;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

const PATH: &str = "/v1/places:searchText";

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_upstream_failure_is_logged_without_credential() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(PATH);
            then.status(503);
        })
        .await;

    let client = GooglePlacesClient::new(server.url(PATH), None).unwrap();
    let engine = ClassificationEngine::new(Arc::new(Registry::builtin().unwrap()));
    let orchestrator = SearchOrchestrator::new(
        client,
        engine,
        LeadFilter::ChainExclusion,
        Some("secret-test-key".to_string()),
        "GOOGLE_API_KEY",
    );
    let app = build_router(Arc::new(orchestrator), cors_layer(&[]).unwrap());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/search?area=kamakura&category=cafe")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let output = logs.contents();
    assert!(output.contains("ERROR"), "logs: {}", output);
    assert!(output.contains("Search failed"), "logs: {}", output);
    assert!(output.contains("kamakura"), "logs: {}", output);
    assert!(output.contains("cafe"), "logs: {}", output);
    assert!(!output.contains("secret-test-key"), "logs: {}", output);
}
