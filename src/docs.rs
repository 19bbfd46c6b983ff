use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::database::models::Product;
use crate::handlers::login::{LoginRequest, TokenResponse};
use crate::handlers::products::CreateProductRequest;

/// OpenAPI document assembled from the handler annotations. Served to humans
/// through Swagger UI at /api-docs; clients do not consume it.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Training API",
        description = "Minimal JWT-authenticated product CRUD API"
    ),
    paths(
        crate::handlers::login::login,
        crate::handlers::products::list_products,
        crate::handlers::products::create_product,
        crate::handlers::products::get_product,
        crate::handlers::products::delete_product,
    ),
    components(schemas(LoginRequest, TokenResponse, Product, CreateProductRequest)),
    modifiers(&BearerAuth),
    tags(
        (name = "auth", description = "Token acquisition"),
        (name = "products", description = "Product CRUD, bearer token required")
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}
