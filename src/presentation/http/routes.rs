// src/presentation/http/routes.rs
use crate::presentation::http::middleware::rate_limit::{RateLimitSettings, rate_limit_layer};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{brands, store_images, stores},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, put},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Router with the default rate limiter and permissive CORS.
pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, true)
}

pub fn build_router_with_rate_limiter(state: HttpState, rate_limit: bool) -> Router {
    RouterOptions {
        rate_limit: rate_limit.then(RateLimitSettings::default),
        allowed_origins: Vec::new(),
    }
    .build(state)
}

/// Cross-cutting settings applied around the API routes.
#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    pub rate_limit: Option<RateLimitSettings>,
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
}

impl RouterOptions {
    pub fn build(&self, state: HttpState) -> Router {
        let body_limit = state.max_upload_bytes;

        let router = Router::new()
            .merge(openapi::docs_router())
            .route("/health", get(health))
            .merge(catalog_routes())
            .layer(DefaultBodyLimit::max(body_limit))
            .layer(TraceLayer::new_for_http())
            .layer(self.cors())
            .layer(Extension(state));

        match self.rate_limit.and_then(rate_limit_layer) {
            Some(layer) => router.layer(layer),
            None => router,
        }
    }

    fn cors(&self) -> CorsLayer {
        let origins: Vec<HeaderValue> = self
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(err) => {
                    tracing::warn!(%origin, error = %err, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();

        let allow_origin = if origins.is_empty() {
            AllowOrigin::from(Any)
        } else {
            AllowOrigin::list(origins)
        };

        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers(Any)
            .max_age(Duration::from_secs(3600))
    }
}

fn catalog_routes() -> Router {
    Router::new()
        .route(
            "/api/v1/brands",
            get(brands::list_brands).post(brands::create_brand),
        )
        .route(
            "/api/v1/brands/{id}",
            get(brands::get_brand)
                .put(brands::update_brand)
                .delete(brands::delete_brand),
        )
        .route("/api/v1/brands/{id}/slug", get(brands::brand_slug_exists))
        .route(
            "/api/v1/brands/{id}/image",
            axum::routing::post(brands::upload_brand_image).delete(brands::delete_brand_image),
        )
        .route(
            "/api/v1/stores",
            get(stores::list_stores).post(stores::create_store),
        )
        .route(
            "/api/v1/stores/{id}",
            get(stores::get_store)
                .put(stores::update_store)
                .delete(stores::delete_store),
        )
        .route("/api/v1/stores/{id}/slug", get(stores::store_slug_exists))
        .route(
            "/api/v1/stores/{id}/image",
            axum::routing::post(stores::upload_store_image).delete(stores::delete_store_image),
        )
        .route(
            "/api/v1/stores/{id}/images",
            get(store_images::list_store_images).post(store_images::add_store_images),
        )
        .route(
            "/api/v1/stores/{id}/images/{image_id}",
            put(store_images::update_store_image).delete(store_images::delete_store_image),
        )
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
