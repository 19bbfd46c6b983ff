use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Credential store row. Read only during login; this service never creates,
/// mutates, or deletes users outside the bootstrap seed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
}
