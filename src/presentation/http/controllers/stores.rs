// src/presentation/http/controllers/stores.rs
use super::resources::{self, ImageUploadForm, ResourceListParams, SlugParams};
use crate::application::dto::{
    CreateResourceInput, ResourceView, UpdateResourceInput, UploadedFileDto,
};
use crate::domain::catalog::ResourceKind;
use crate::presentation::http::error::{ErrorResponse, HttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Multipart, Path, Query},
    http::StatusCode,
};
use serde_json::Value;

const KIND: ResourceKind = ResourceKind::Store;

#[utoipa::path(
    get,
    path = "/api/v1/stores",
    params(ResourceListParams),
    responses(
        (status = 200, description = "Stores ordered by position.", body = [ResourceView])
    ),
    tag = "Stores"
)]
pub async fn list_stores(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ResourceListParams>,
) -> HttpResult<Json<Vec<Value>>> {
    resources::list(&state, KIND, params).await
}

#[utoipa::path(
    post,
    path = "/api/v1/stores",
    request_body = CreateResourceInput,
    responses(
        (status = 200, description = "Store created.", body = ResourceView),
        (status = 409, description = "Slug taken concurrently.", body = ErrorResponse)
    ),
    tag = "Stores"
)]
pub async fn create_store(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateResourceInput>,
) -> HttpResult<Json<ResourceView>> {
    resources::create(&state, KIND, payload).await
}

#[utoipa::path(
    get,
    path = "/api/v1/stores/{id}",
    params(("id" = String, Path, description = "Store id")),
    responses(
        (status = 200, description = "Store found.", body = ResourceView),
        (status = 400, description = "Malformed id.", body = ErrorResponse),
        (status = 404, description = "No such store.", body = ErrorResponse)
    ),
    tag = "Stores"
)]
pub async fn get_store(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ResourceView>> {
    resources::get(&state, KIND, id).await
}

#[utoipa::path(
    put,
    path = "/api/v1/stores/{id}",
    params(("id" = String, Path, description = "Store id")),
    request_body = UpdateResourceInput,
    responses(
        (status = 200, description = "Store updated.", body = ResourceView),
        (status = 400, description = "Malformed id or empty update.", body = ErrorResponse),
        (status = 404, description = "No such store.", body = ErrorResponse),
        (status = 409, description = "Slug taken concurrently.", body = ErrorResponse)
    ),
    tag = "Stores"
)]
pub async fn update_store(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateResourceInput>,
) -> HttpResult<Json<ResourceView>> {
    resources::update(&state, KIND, id, payload).await
}

#[utoipa::path(
    delete,
    path = "/api/v1/stores/{id}",
    params(("id" = String, Path, description = "Store id")),
    responses(
        (status = 200, description = "Store deleted."),
        (status = 400, description = "Malformed id.", body = ErrorResponse),
        (status = 404, description = "No such store.", body = ErrorResponse)
    ),
    tag = "Stores"
)]
pub async fn delete_store(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    resources::delete(&state, KIND, id).await
}

#[utoipa::path(
    get,
    path = "/api/v1/stores/{id}/slug",
    params(("id" = String, Path, description = "Store asking"), SlugParams),
    responses(
        (status = 200, description = "Another store holds the slug."),
        (status = 404, description = "The slug is free.", body = ErrorResponse)
    ),
    tag = "Stores"
)]
pub async fn store_slug_exists(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Query(params): Query<SlugParams>,
) -> HttpResult<StatusCode> {
    resources::slug_exists(&state, KIND, id, params).await
}

#[utoipa::path(
    post,
    path = "/api/v1/stores/{id}/image",
    params(("id" = String, Path, description = "Store id")),
    request_body(content = ImageUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Primary image stored.", body = UploadedFileDto),
        (status = 400, description = "No file part in the request.", body = ErrorResponse),
        (status = 404, description = "No such store.", body = ErrorResponse)
    ),
    tag = "Stores"
)]
pub async fn upload_store_image(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> HttpResult<Json<UploadedFileDto>> {
    resources::upload_image(&state, KIND, id, multipart).await
}

#[utoipa::path(
    delete,
    path = "/api/v1/stores/{id}/image",
    params(("id" = String, Path, description = "Store id")),
    responses(
        (status = 200, description = "Primary image removed."),
        (status = 404, description = "No such store.", body = ErrorResponse)
    ),
    tag = "Stores"
)]
pub async fn delete_store_image(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    resources::delete_image(&state, KIND, id).await
}
