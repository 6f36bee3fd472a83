// src/presentation/http/controllers/resources.rs
//! Handlers shared by every resource kind. The per-kind controllers are thin
//! wrappers that fix the kind and carry the OpenAPI annotations.
use crate::application::{
    commands::UploadContext,
    dto::{CreateResourceInput, ResourceView, UpdateResourceInput, UploadedFileDto},
    queries::resources::{GetResourceByIdQuery, ListResourcesQuery, SlugExistsQuery},
};
use crate::domain::catalog::ResourceKind;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Json,
    extract::{Multipart, multipart::Field},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

pub(crate) const MISSING_UPLOAD: &str = "Required fields are missing";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ResourceListParams {
    /// `true` or `false`; anything else is ignored.
    pub enabled: Option<String>,
    pub id: Option<String>,
    /// Comma separated list of keys to return; `id` is always included.
    pub fields: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SlugParams {
    pub slug: Option<String>,
}

/// Multipart body carrying one or more image files.
#[derive(Debug, ToSchema)]
pub struct ImageUploadForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

pub(super) async fn list(
    state: &HttpState,
    kind: ResourceKind,
    params: ResourceListParams,
) -> HttpResult<Json<Vec<Value>>> {
    let query = ListResourcesQuery {
        enabled: params.enabled,
        id: params.id,
        fields: params.fields,
    };

    state
        .services
        .resources(kind)
        .queries
        .list_resources(query)
        .await
        .into_http()
        .map(Json)
}

pub(super) async fn get(
    state: &HttpState,
    kind: ResourceKind,
    id: String,
) -> HttpResult<Json<ResourceView>> {
    state
        .services
        .resources(kind)
        .queries
        .get_resource_by_id(GetResourceByIdQuery { id })
        .await
        .into_http()?
        .map(Json)
        .ok_or_else(|| not_found(kind))
}

pub(super) async fn create(
    state: &HttpState,
    kind: ResourceKind,
    payload: CreateResourceInput,
) -> HttpResult<Json<ResourceView>> {
    state
        .services
        .resources(kind)
        .commands
        .create(payload)
        .await
        .into_http()
        .map(Json)
}

pub(super) async fn update(
    state: &HttpState,
    kind: ResourceKind,
    id: String,
    payload: UpdateResourceInput,
) -> HttpResult<Json<ResourceView>> {
    state
        .services
        .resources(kind)
        .commands
        .update(&id, payload)
        .await
        .into_http()?
        .map(Json)
        .ok_or_else(|| not_found(kind))
}

pub(super) async fn delete(
    state: &HttpState,
    kind: ResourceKind,
    id: String,
) -> HttpResult<StatusCode> {
    let removed = state
        .services
        .resources(kind)
        .commands
        .delete(&id)
        .await
        .into_http()?;

    if removed {
        Ok(StatusCode::OK)
    } else {
        Err(not_found(kind))
    }
}

pub(super) async fn slug_exists(
    state: &HttpState,
    kind: ResourceKind,
    id: String,
    params: SlugParams,
) -> HttpResult<StatusCode> {
    let exists = state
        .services
        .resources(kind)
        .queries
        .slug_exists(SlugExistsQuery {
            id,
            slug: params.slug,
        })
        .await
        .into_http()?;

    if exists {
        Ok(StatusCode::OK)
    } else {
        Err(HttpError::not_found("slug is free"))
    }
}

pub(super) async fn upload_image(
    state: &HttpState,
    kind: ResourceKind,
    id: String,
    mut multipart: Multipart,
) -> HttpResult<Json<UploadedFileDto>> {
    let commands = &state.services.resources(kind).commands;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|err| HttpError::multipart(&err))?
    {
        let Some(original_name) = field.file_name().map(str::to_string) else {
            continue;
        };

        let mut upload = commands
            .begin_primary_image_upload(&id, &original_name)
            .await
            .into_http()?;
        stream_field(&mut field, &mut upload).await?;
        let uploaded = commands
            .finish_primary_image_upload(upload)
            .await
            .into_http()?;
        return Ok(Json(uploaded));
    }

    Err(HttpError::bad_request(MISSING_UPLOAD))
}

pub(super) async fn delete_image(
    state: &HttpState,
    kind: ResourceKind,
    id: String,
) -> HttpResult<StatusCode> {
    let found = state
        .services
        .resources(kind)
        .commands
        .delete_primary_image(&id)
        .await
        .into_http()?;

    if found {
        Ok(StatusCode::OK)
    } else {
        Err(not_found(kind))
    }
}

/// Copy one multipart field into an open upload. Returning early drops the
/// upload, which discards the partial file.
pub(super) async fn stream_field(
    field: &mut Field<'_>,
    upload: &mut UploadContext,
) -> HttpResult<()> {
    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|err| HttpError::multipart(&err))?
    {
        upload.write(&chunk).await.into_http()?;
    }
    Ok(())
}

pub(super) fn not_found(kind: ResourceKind) -> HttpError {
    HttpError::not_found(format!("{kind} not found"))
}
