use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::database::models::Product;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// Creation payload. Fields are optional on purpose: an absent field is
/// bound as SQL NULL and the column constraints decide the outcome, which
/// for the NOT NULL schema means the insert fails and the client sees a 500.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
}

/// GET /api/products - list all products in store-native order.
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "products",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "A list of products", body = [Product]),
        (status = 401, description = "Missing Authorization header"),
        (status = 400, description = "Invalid or expired token"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<Json<Vec<Product>>, ApiError> {
    tracing::debug!(user_id = auth_user.user_id, "listing products");

    let products = sqlx::query_as::<_, Product>("SELECT id, name, price FROM products")
        .fetch_all(state.db.pool())
        .await?;

    Ok(Json(products))
}

/// POST /api/products - insert one row and echo it back.
///
/// The returned id is the store-generated one, read back via RETURNING.
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "products",
    security(("bearer_auth" = [])),
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Successfully created", body = Product),
        (status = 401, description = "Missing Authorization header"),
        (status = 400, description = "Invalid or expired token"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<Json<Product>, ApiError> {
    let product = sqlx::query_as::<_, Product>(
        "INSERT INTO products (name, price) VALUES ($1, $2) RETURNING id, name, price",
    )
    .bind(&payload.name)
    .bind(payload.price)
    .fetch_one(state.db.pool())
    .await?;

    Ok(Json(product))
}

/// GET /api/products/:id - show a single product.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "products",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "ID of the product to retrieve")),
    responses(
        (status = 200, description = "A single product", body = Product),
        (status = 404, description = "Product not found"),
        (status = 401, description = "Missing Authorization header"),
        (status = 400, description = "Invalid or expired token"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>, ApiError> {
    let product = sqlx::query_as::<_, Product>(
        "SELECT id, name, price FROM products WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(state.db.pool())
    .await?;

    match product {
        Some(product) => Ok(Json(product)),
        None => Err(ApiError::not_found("Product not found")),
    }
}

/// DELETE /api/products/:id - delete a single product.
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "products",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "ID of the product to delete")),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 404, description = "Product not found"),
        (status = 401, description = "Missing Authorization header"),
        (status = 400, description = "Invalid or expired token"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(state.db.pool())
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::not_found("Product not found"));
    }

    Ok(StatusCode::NO_CONTENT)
}
