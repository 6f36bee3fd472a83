// tests/support/helpers.rs
use std::sync::{Arc, Mutex};

use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use catalog_core::application::{
    dto::CatalogLinks,
    ports::{storage::ImageStorage, time::Clock, util::SlugGenerator},
    services::{ApplicationServices, ResourceRepositories},
};
use catalog_core::domain::catalog::{ResourceImageRepository, ResourceKind};
use catalog_core::infrastructure::{storage::LocalImageStorage, util::DefaultSlugGenerator};
use catalog_core::presentation::http::{routes, state::HttpState};
use serde_json::Value;
use tempfile::TempDir;
use url::Url;

use super::mocks::{DummyClock, InMemoryCatalog, ProductRow, SharedProducts};

pub const TEST_DOMAIN: &str = "https://shop.test";
pub const MULTIPART_BOUNDARY: &str = "catalog-test-boundary";

pub fn test_links() -> CatalogLinks {
    let domain = Url::parse(TEST_DOMAIN).expect("test domain");
    CatalogLinks::new(domain, "/images/brands", "/images/stores").expect("test links")
}

/// Fully wired services over in-memory repositories.
pub struct TestCatalog {
    pub brands: InMemoryCatalog,
    pub stores: InMemoryCatalog,
    pub products: SharedProducts,
    pub uploads: TempDir,
    pub services: Arc<ApplicationServices>,
}

impl TestCatalog {
    pub fn brand_dir(&self) -> std::path::PathBuf {
        self.uploads.path().join("brands")
    }

    pub fn store_dir(&self) -> std::path::PathBuf {
        self.uploads.path().join("stores")
    }

    pub fn add_product(&self, name: &str, brand: Option<&str>, store: Option<&str>) {
        let parse = |id: &str| {
            catalog_core::domain::catalog::ResourceId::parse(id).expect("valid resource id")
        };
        self.products.lock().unwrap().push(ProductRow {
            name: name.to_string(),
            brand_id: brand.map(parse),
            store_id: store.map(parse),
        });
    }

    pub fn product(&self, name: &str) -> ProductRow {
        self.products
            .lock()
            .unwrap()
            .iter()
            .find(|product| product.name == name)
            .cloned()
            .expect("product exists")
    }
}

pub fn build_catalog() -> TestCatalog {
    build_catalog_with(None)
}

/// Same wiring, with every storage call routed to `storage`.
pub fn build_catalog_with_storage(storage: Arc<dyn ImageStorage>) -> TestCatalog {
    build_catalog_with(Some(storage))
}

fn build_catalog_with(storage: Option<Arc<dyn ImageStorage>>) -> TestCatalog {
    let products: SharedProducts = Arc::new(Mutex::new(Vec::new()));
    let brands = InMemoryCatalog::new(ResourceKind::Brand, Arc::clone(&products));
    let stores = InMemoryCatalog::new(ResourceKind::Store, Arc::clone(&products));
    let uploads = tempfile::tempdir().expect("tempdir");

    let storage = storage.unwrap_or_else(|| {
        let local: Arc<dyn ImageStorage> = Arc::new(LocalImageStorage::new(
            uploads.path().join("brands"),
            uploads.path().join("stores"),
        ));
        local
    });
    let clock: Arc<dyn Clock> = Arc::new(DummyClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let store_images: Arc<dyn ResourceImageRepository> = Arc::new(stores.clone());

    let services = Arc::new(ApplicationServices::new(
        repositories(&brands),
        repositories(&stores),
        store_images,
        storage,
        clock,
        slugger,
        &test_links(),
    ));

    TestCatalog {
        brands,
        stores,
        products,
        uploads,
        services,
    }
}

fn repositories(catalog: &InMemoryCatalog) -> ResourceRepositories {
    ResourceRepositories {
        read: Arc::new(catalog.clone()),
        write: Arc::new(catalog.clone()),
        references: Arc::new(catalog.clone()),
    }
}

pub fn make_test_router(catalog: &TestCatalog) -> axum::Router {
    let state = HttpState {
        services: Arc::clone(&catalog.services),
        max_upload_bytes: 1024 * 1024,
    };
    routes::build_router_with_rate_limiter(state, false)
}

pub async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

pub fn json_request(method: &str, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// One multipart part: field name, optional file name, contents.
pub type Part<'a> = (&'a str, Option<&'a str>, &'a [u8]);

pub fn multipart_request(uri: &str, parts: &[Part<'_>]) -> Request<Body> {
    let mut payload = Vec::new();
    for (field, filename, contents) in parts {
        payload.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
        let disposition = match filename {
            Some(name) => format!(
                "Content-Disposition: form-data; name=\"{field}\"; filename=\"{name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            ),
            None => format!("Content-Disposition: form-data; name=\"{field}\"\r\n\r\n"),
        };
        payload.extend_from_slice(disposition.as_bytes());
        payload.extend_from_slice(contents);
        payload.extend_from_slice(b"\r\n");
    }
    payload.extend_from_slice(format!("--{MULTIPART_BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        )
        .body(Body::from(payload))
        .unwrap()
}

/// Assert the status and that the body is an `{error, message}` document
/// whose `error` equals `expected_error`.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let json = body_json(resp).await;
    assert_eq!(json.get("error").and_then(Value::as_str), Some(expected_error));
    assert!(json.get("message").and_then(Value::as_str).is_some());
}
