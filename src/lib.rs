pub mod auth;
pub mod config;
pub mod database;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;

use axum::{
    routing::get,
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::middleware::jwt_auth_middleware;
use crate::state::AppState;

/// Build the full application router. Exposed so integration tests can drive
/// the router in-process with `tower::ServiceExt::oneshot`.
pub fn app(state: AppState) -> Router {
    use axum::routing::post;
    use handlers::{login, products};

    // Everything under /api/products sits behind the token check; login does not.
    let protected = Router::new()
        .route(
            "/api/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/api/products/:id",
            get(products::get_product).delete(products::delete_product),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            jwt_auth_middleware,
        ));

    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/login", post(login::login))
        // Protected API
        .merge(protected)
        // Human-browsable API documentation
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "Training API",
        "version": version,
        "description": "Minimal JWT-authenticated product CRUD API",
        "endpoints": {
            "login": "POST /api/login (public)",
            "products": "GET|POST /api/products, GET|DELETE /api/products/:id (bearer token)",
            "docs": "/api-docs (public)",
            "health": "/health (public)"
        }
    }))
}

async fn health(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match state.db.health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => {
            tracing::error!("health check failed: {}", e);
            (
                axum::http::StatusCode::SERVICE_UNAVAILABLE,
                axum::response::Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database": "unreachable"
                })),
            )
        }
    }
}
