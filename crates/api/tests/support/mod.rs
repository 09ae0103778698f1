#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use datelog_core::{DateRecordStore, ScopedStoreFactory};
use datelog_domain::{Config, Result as DomainResult, Session};
use datelog_infra::{MemoryStoreFactory, StaticTokenVerifier};
use datelog_lib::{build_router, AppContext};
use serde_json::Value;
use tower::ServiceExt;

pub const ALICE: &str = "alice-token";
pub const BOB: &str = "bob-token";

/// Store factory that counts how many scoped handles were handed out.
#[derive(Clone, Default)]
pub struct CountingStores {
    inner: MemoryStoreFactory,
    handles: Arc<AtomicUsize>,
}

impl CountingStores {
    pub fn handles(&self) -> usize {
        self.handles.load(Ordering::SeqCst)
    }
}

impl ScopedStoreFactory for CountingStores {
    fn scoped(&self, session: &Session) -> DomainResult<Box<dyn DateRecordStore>> {
        self.handles.fetch_add(1, Ordering::SeqCst);
        self.inner.scoped(session)
    }
}

/// Router over in-memory collaborators with two known users.
pub struct TestApp {
    pub router: Router,
    pub stores: CountingStores,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let stores = CountingStores::default();
        let verifier = StaticTokenVerifier::new([(ALICE, "alice"), (BOB, "bob")]);
        let ctx = AppContext::from_parts(config, Arc::new(verifier), Arc::new(stores.clone()));
        Self { router: build_router(Arc::new(ctx)), stores }
    }

    /// Run a request and hand back the raw response, headers included.
    pub async fn respond(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.expect("router response")
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .expect("request");

        self.send_request(request).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.respond(request).await;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let value = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, value)
    }
}
