//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "MongoDB-based REST API for managing products, tags and product thumbnails",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc),
        (path = "/api/tags", api = domain_tags::ApiDoc)
    ),
    tags(
        (name = "Products", description = "Product management and thumbnail endpoints"),
        (name = "Tags", description = "Tag management endpoints")
    )
)]
pub struct ApiDoc;
