//! HTTP handlers for Tags API

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    UuidPath, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::TagResult;
use crate::models::{CreateTag, Tag, TagFilter};
use crate::repository::TagRepository;
use crate::service::TagService;

/// OpenAPI documentation for Tags API
#[derive(OpenApi)]
#[openapi(
    paths(list_tags, create_tag, get_tag, delete_tag),
    components(
        schemas(Tag, CreateTag, TagFilter),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Tags", description = "Tag management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the tags router with all HTTP endpoints
pub fn router<R: TagRepository + 'static>(service: TagService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_tags).post(create_tag))
        .route("/{id}", get(get_tag).delete(delete_tag))
        .with_state(shared_service)
}

/// List tags with optional filters
#[utoipa::path(
    get,
    path = "",
    tag = "Tags",
    params(TagFilter),
    responses(
        (status = 200, description = "List of tags", body = Vec<Tag>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_tags<R: TagRepository>(
    State(service): State<Arc<TagService<R>>>,
    Query(filter): Query<TagFilter>,
) -> TagResult<Json<Vec<Tag>>> {
    let tags = service.list_tags(filter).await?;
    Ok(Json(tags))
}

/// Create a new tag
#[utoipa::path(
    post,
    path = "",
    tag = "Tags",
    request_body = CreateTag,
    responses(
        (status = 200, description = "Tag created successfully", body = Tag),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_tag<R: TagRepository>(
    State(service): State<Arc<TagService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateTag>,
) -> TagResult<Json<Tag>> {
    let tag = service.create_tag(input).await?;
    Ok(Json(tag))
}

/// Get a tag by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Tags",
    params(
        ("id" = Uuid, Path, description = "Tag ID")
    ),
    responses(
        (status = 200, description = "Tag found", body = Tag),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_tag<R: TagRepository>(
    State(service): State<Arc<TagService<R>>>,
    UuidPath(id): UuidPath,
) -> TagResult<Json<Tag>> {
    let tag = service.get_tag(id).await?;
    Ok(Json(tag))
}

/// Delete a tag
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Tags",
    params(
        ("id" = Uuid, Path, description = "Tag ID")
    ),
    responses(
        (status = 204, description = "Tag deleted successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_tag<R: TagRepository>(
    State(service): State<Arc<TagService<R>>>,
    UuidPath(id): UuidPath,
) -> TagResult<impl IntoResponse> {
    service.delete_tag(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
