//! Shared helpers for HTTP-level tests.

use async_trait::async_trait;
use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use petclinic::{
    api::create_router, config::Config, db::VetRepository, state::AppState, Error, Result,
};
use petclinic_models::{Page, PageRequest, Specialty, Vet};
use std::{
    future::Future,
    pin::Pin,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};
use tower::ServiceExt;

const MAX_BODY_BYTES: usize = 1024 * 1024;

pub fn james() -> Vet {
    Vet::new(1, "James", "Carter")
}

pub fn helen() -> Vet {
    Vet::new(2, "Helen", "Leary").with_specialty(Specialty::new(1, "radiology"))
}

pub fn sam() -> Vet {
    Vet::new(3, "Sam", "Smith")
}

/// Repository double that records calls.
///
/// By default pages are cut from `vets` using the incoming request; a fixed
/// page can be forced with [`StubVetRepository::with_page`], which is then
/// returned for every request.
#[derive(Default)]
pub struct StubVetRepository {
    vets: Vec<Vet>,
    fixed_page: Option<Page<Vet>>,
    fail: bool,
    find_all_calls: AtomicUsize,
    find_all_paged_calls: AtomicUsize,
    last_request: Mutex<Option<PageRequest>>,
}

impl StubVetRepository {
    pub fn new(vets: Vec<Vet>) -> Self {
        Self {
            vets,
            ..Self::default()
        }
    }

    pub fn with_page(mut self, page: Page<Vet>) -> Self {
        self.fixed_page = Some(page);
        self
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn find_all_calls(&self) -> usize {
        self.find_all_calls.load(Ordering::SeqCst)
    }

    pub fn find_all_paged_calls(&self) -> usize {
        self.find_all_paged_calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<PageRequest> {
        *self.last_request.lock().unwrap()
    }
}

#[async_trait]
impl VetRepository for StubVetRepository {
    async fn find_all(&self) -> Result<Vec<Vet>> {
        self.find_all_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::Repository("stub repository failure".to_string()));
        }
        Ok(self.vets.clone())
    }

    async fn find_all_paged(&self, request: PageRequest) -> Result<Page<Vet>> {
        self.find_all_paged_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request);
        if self.fail {
            return Err(Error::Repository("stub repository failure".to_string()));
        }
        Ok(match &self.fixed_page {
            Some(page) => page.clone(),
            None => Page::from_slice(&self.vets, request),
        })
    }
}

pub struct TestApp {
    pub state: AppState,
    pub router: Router,
    pub repository: Arc<StubVetRepository>,
}

impl TestApp {
    pub fn new(repository: StubVetRepository) -> Self {
        Self::with_config(Config::default(), repository)
    }

    pub fn with_config(config: Config, repository: StubVetRepository) -> Self {
        let repository = Arc::new(repository);
        let state = AppState::with_repository(config, repository.clone());
        let router = create_router(state.clone());
        Self {
            state,
            router,
            repository,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Bytes>,
    ) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        self.request_with_extra_headers(method, uri, body, &[]).await
    }

    pub async fn request_with_extra_headers(
        &self,
        method: Method,
        uri: &str,
        body: Option<Bytes>,
        headers: &[(&str, &str)],
    ) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        let mut builder = Request::builder().method(method).uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let request = builder.body(body.map(Body::from).unwrap_or_else(Body::empty))?;

        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), MAX_BODY_BYTES).await?;
        Ok((status, headers, body))
    }
}

pub async fn with_test_app<F>(repository: StubVetRepository, f: F) -> anyhow::Result<()>
where
    F: for<'a> FnOnce(&'a TestApp) -> Pin<Box<dyn Future<Output = anyhow::Result<()>> + 'a>>,
{
    let app = TestApp::new(repository);
    f(&app).await
}

pub fn assert_status(actual: StatusCode, expected: StatusCode, context: &str) {
    assert_eq!(
        actual, expected,
        "{context}: expected status {expected}, got {actual}"
    );
}

pub fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

pub fn parse_json(body: &[u8]) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::from_slice(body)?)
}
