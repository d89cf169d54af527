//! HTTP handlers for Products API

use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestUploadResponse, BadRequestUuidResponse, BadRequestValidationResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
    UuidPath, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{
    CountResponse, CreateProduct, Product, ProductFilter, ReplaceProduct, UpdateProduct,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// Multipart form schema for thumbnail uploads
#[derive(utoipa::ToSchema)]
#[allow(dead_code)]
struct ThumbnailUpload {
    /// Image file (JPEG or PNG, at most 1 MiB)
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
}

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        update_products,
        count_products,
        get_product,
        update_product,
        replace_product,
        delete_product,
        upload_thumbnail,
        delete_thumbnail,
    ),
    components(
        schemas(
            Product, CreateProduct, UpdateProduct, ReplaceProduct,
            ProductFilter, CountResponse, ThumbnailUpload
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            BadRequestUploadResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/",
            get(list_products)
                .post(create_product)
                .patch(update_products),
        )
        .route("/count", get(count_products))
        .route(
            "/{id}",
            get(get_product)
                .patch(update_product)
                .put(replace_product)
                .delete(delete_product),
        )
        .route(
            "/{id}/thumbnail",
            axum::routing::post(upload_thumbnail).delete(delete_thumbnail),
        )
        .with_state(shared_service)
}

/// List products with optional filters
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ProductFilter),
    responses(
        (status = 200, description = "List of products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(filter): Query<ProductFilter>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_products(filter).await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 200, description = "Product created successfully", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<Json<Product>> {
    let product = service.create_product(input).await?;
    Ok(Json(product))
}

/// Update all products matching a filter
#[utoipa::path(
    patch,
    path = "",
    tag = "Products",
    params(ProductFilter),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Number of updated products", body = CountResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(filter): Query<ProductFilter>,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> ProductResult<Json<CountResponse>> {
    let count = service.update_products(filter, input).await?;
    Ok(Json(CountResponse { count }))
}

/// Count products matching a filter
#[utoipa::path(
    get,
    path = "/count",
    tag = "Products",
    params(ProductFilter),
    responses(
        (status = 200, description = "Product count", body = CountResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn count_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(filter): Query<ProductFilter>,
) -> ProductResult<Json<CountResponse>> {
    let count = service.count_products(filter).await?;
    Ok(Json(CountResponse { count }))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<Json<Product>> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Partially update a product
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 204, description = "Product updated successfully"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> ProductResult<impl IntoResponse> {
    service.update_product(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Replace a product's attributes
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = ReplaceProduct,
    responses(
        (status = 204, description = "Product replaced successfully"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn replace_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<ReplaceProduct>,
) -> ProductResult<impl IntoResponse> {
    service.replace_product(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<impl IntoResponse> {
    service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Upload a product thumbnail
///
/// Accepts a single JPEG or PNG file of at most 1 MiB, resizes it to
/// 100x100 and returns the stored reference path.
#[utoipa::path(
    post,
    path = "/{id}/thumbnail",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body(content = inline(ThumbnailUpload), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Thumbnail stored, returns the reference path", body = String),
        (status = 400, response = BadRequestUploadResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn upload_thumbnail<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
    multipart: Multipart,
) -> ProductResult<Json<String>> {
    let reference_path = service.upload_thumbnail(id, multipart).await?;
    Ok(Json(reference_path))
}

/// Delete a product's thumbnail
///
/// Idempotent: succeeds as a no-op when no thumbnail is set.
#[utoipa::path(
    delete,
    path = "/{id}/thumbnail",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Thumbnail deleted"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_thumbnail<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<impl IntoResponse> {
    service.delete_thumbnail(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
