//! Test harness over the in-memory catalog store.
//!
//! Every harness gets its own store seeded from `CatalogFixture`, so tests
//! never share state.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use marketplace_core::kernel::{InMemoryCatalogStore, ServerDeps, TestDependencies};
use marketplace_core::server::build_app;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use super::{CatalogFixture, GraphQLClient};

pub struct TestHarness {
    pub fixture: CatalogFixture,
    pub store: Arc<InMemoryCatalogStore>,
    pub deps: ServerDeps,
}

impl TestHarness {
    pub fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let fixture = CatalogFixture::new();
        let test_deps = TestDependencies::new().store(fixture.store());
        let store = test_deps.store.clone();

        Self {
            fixture,
            store,
            deps: test_deps.into_server_deps(),
        }
    }

    pub fn graphql(&self) -> GraphQLClient {
        GraphQLClient::new(self.deps.clone())
    }

    pub fn router(&self) -> Router {
        build_app(self.deps.clone(), &[])
    }

    /// GET `uri` through the router, returning status and JSON body
    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        self.request_json(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn request_json(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }
}
