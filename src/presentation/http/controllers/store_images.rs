// src/presentation/http/controllers/store_images.rs
use super::resources::{ImageUploadForm, stream_field};
use crate::application::{
    dto::{ImageView, UpdateImageInput},
    queries::images::ListImagesQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Multipart, Path},
    http::StatusCode,
};

#[utoipa::path(
    get,
    path = "/api/v1/stores/{id}/images",
    params(("id" = String, Path, description = "Store id")),
    responses(
        (status = 200, description = "Gallery ordered by position; empty for unknown stores.", body = [ImageView]),
        (status = 400, description = "Malformed id.", body = ErrorResponse)
    ),
    tag = "Store images"
)]
pub async fn list_store_images(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<Vec<ImageView>>> {
    state
        .services
        .store_image_queries
        .list_images(ListImagesQuery { owner: id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/stores/{id}/images",
    params(("id" = String, Path, description = "Store id")),
    request_body(content = ImageUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Records of the images just added.", body = [ImageView]),
        (status = 400, description = "Malformed id or multipart body.", body = ErrorResponse),
        (status = 404, description = "No such store.", body = ErrorResponse)
    ),
    tag = "Store images"
)]
pub async fn add_store_images(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> HttpResult<Json<Vec<ImageView>>> {
    let commands = &state.services.store_image_commands;
    let mut added = Vec::new();

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|err| HttpError::multipart(&err))?
    {
        let Some(original_name) = field.file_name().map(str::to_string) else {
            continue;
        };

        let mut upload = commands
            .begin_image_upload(&id, &original_name)
            .await
            .into_http()?;
        stream_field(&mut field, &mut upload).await?;
        added.push(commands.add_image(upload).await.into_http()?);
    }

    Ok(Json(added))
}

#[utoipa::path(
    put,
    path = "/api/v1/stores/{id}/images/{image_id}",
    params(
        ("id" = String, Path, description = "Store id"),
        ("image_id" = String, Path, description = "Image id")
    ),
    request_body = UpdateImageInput,
    responses(
        (status = 200, description = "Image updated.", body = ImageView),
        (status = 400, description = "Malformed id or empty update.", body = ErrorResponse),
        (status = 404, description = "No such image.", body = ErrorResponse)
    ),
    tag = "Store images"
)]
pub async fn update_store_image(
    Extension(state): Extension<HttpState>,
    Path((id, image_id)): Path<(String, String)>,
    Json(payload): Json<UpdateImageInput>,
) -> HttpResult<Json<ImageView>> {
    state
        .services
        .store_image_commands
        .update_image(&id, &image_id, &payload)
        .await
        .into_http()?
        .map(Json)
        .ok_or_else(|| HttpError::not_found("image not found"))
}

#[utoipa::path(
    delete,
    path = "/api/v1/stores/{id}/images/{image_id}",
    params(
        ("id" = String, Path, description = "Store id"),
        ("image_id" = String, Path, description = "Image id")
    ),
    responses(
        (status = 200, description = "Image removed, or already absent."),
        (status = 400, description = "Malformed id.", body = ErrorResponse)
    ),
    tag = "Store images"
)]
pub async fn delete_store_image(
    Extension(state): Extension<HttpState>,
    Path((id, image_id)): Path<(String, String)>,
) -> HttpResult<StatusCode> {
    state
        .services
        .store_image_commands
        .delete_image(&id, &image_id)
        .await
        .into_http()?;
    Ok(StatusCode::OK)
}
