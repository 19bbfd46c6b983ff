use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::{self, Claims};
use crate::database::models::User;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

/// POST /api/login - Authenticate and receive a bearer token.
///
/// An unknown username and a wrong password produce the identical 400
/// response, so a caller cannot probe which one failed.
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successfully logged in", body = TokenResponse),
        (status = 400, description = "Invalid credentials"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, password_hash FROM users WHERE username = $1",
    )
    .bind(&payload.username)
    .fetch_optional(state.db.pool())
    .await?;

    let Some(user) = user else {
        return Err(ApiError::invalid_credentials());
    };

    // A stored hash bcrypt cannot parse counts as a failed comparison.
    if !bcrypt::verify(&payload.password, &user.password_hash).unwrap_or(false) {
        return Err(ApiError::invalid_credentials());
    }

    let claims = Claims::new(user.id, state.config.token_ttl_secs);
    let token = auth::issue_token(&claims, &state.config.jwt_secret)?;

    tracing::debug!(user_id = user.id, "issued token");
    Ok(Json(TokenResponse { token }))
}
