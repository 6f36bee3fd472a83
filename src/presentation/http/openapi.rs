// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

const DEFAULT_SERVER_URL: &str = "http://localhost:8080";
const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::brands::list_brands,
        crate::presentation::http::controllers::brands::create_brand,
        crate::presentation::http::controllers::brands::get_brand,
        crate::presentation::http::controllers::brands::update_brand,
        crate::presentation::http::controllers::brands::delete_brand,
        crate::presentation::http::controllers::brands::brand_slug_exists,
        crate::presentation::http::controllers::brands::upload_brand_image,
        crate::presentation::http::controllers::brands::delete_brand_image,
        crate::presentation::http::controllers::stores::list_stores,
        crate::presentation::http::controllers::stores::create_store,
        crate::presentation::http::controllers::stores::get_store,
        crate::presentation::http::controllers::stores::update_store,
        crate::presentation::http::controllers::stores::delete_store,
        crate::presentation::http::controllers::stores::store_slug_exists,
        crate::presentation::http::controllers::stores::upload_store_image,
        crate::presentation::http::controllers::stores::delete_store_image,
        crate::presentation::http::controllers::store_images::list_store_images,
        crate::presentation::http::controllers::store_images::add_store_images,
        crate::presentation::http::controllers::store_images::update_store_image,
        crate::presentation::http::controllers::store_images::delete_store_image,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::resources::ImageUploadForm,
            crate::application::dto::CreateResourceInput,
            crate::application::dto::UpdateResourceInput,
            crate::application::dto::UpdateImageInput,
            crate::application::dto::ResourceView,
            crate::application::dto::ImageView,
            crate::application::dto::UploadedFileDto
        )
    ),
    tags(
        (name = "Brands", description = "Brand administration"),
        (name = "Stores", description = "Store administration"),
        (name = "Store images", description = "Store gallery management"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ServerList),
    info(
        title = "Catalog Admin API",
        description = "Administrative CRUD for brands, stores and store images",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Fills `servers` from `PUBLIC_API_URLS` (comma separated) or
/// `PUBLIC_API_URL`, always keeping the local default.
struct ServerList;

impl Modify for ServerList {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls = public_urls(
            env::var("PUBLIC_API_URLS").ok().as_deref(),
            env::var("PUBLIC_API_URL").ok().as_deref(),
        );
        if !urls.iter().any(|url| url == DEFAULT_SERVER_URL) {
            urls.push(DEFAULT_SERVER_URL.to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

fn public_urls(many: Option<&str>, single: Option<&str>) -> Vec<String> {
    let sanitize = |segment: &str| segment.trim().trim_end_matches('/').to_string();

    let urls: Vec<String> = many
        .unwrap_or_default()
        .split(',')
        .map(sanitize)
        .filter(|url| !url.is_empty())
        .collect();

    if urls.is_empty() {
        single
            .map(sanitize)
            .filter(|url| !url.is_empty())
            .into_iter()
            .collect()
    } else {
        urls
    }
}

/// Swagger UI at `/docs` (serving `/openapi.json`), Redoc at `/redoc`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Path the snapshot binary writes to; `OPENAPI_SNAPSHOT_PATH` overrides it.
pub fn snapshot_path() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string())
}

pub fn write_openapi_snapshot(output_path: &str) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let path = Path::new(output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
