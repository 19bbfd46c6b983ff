use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token payload: the authenticated user id plus issue/expiry timestamps.
/// Nothing else is encoded; user existence is not re-checked after issuance.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(user_id: i32, ttl_secs: u64) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl_secs as i64)).timestamp(),
        }
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token generation failed: {0}")]
    Generation(String),

    #[error("invalid token: {0}")]
    Invalid(String),

    #[error("signing secret is empty")]
    EmptySecret,
}

/// Sign a claim with the process-wide secret (HS256).
pub fn issue_token(claims: &Claims, secret: &str) -> Result<String, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::EmptySecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), claims, &encoding_key)
        .map_err(|e| TokenError::Generation(e.to_string()))
}

/// Verify signature and expiry, returning the embedded claims.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::EmptySecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
        .map_err(|e| TokenError::Invalid(e.to_string()))?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-secret";

    #[test]
    fn issued_token_round_trips() {
        let claims = Claims::new(42, 3600);
        let token = issue_token(&claims, SECRET).unwrap();

        let decoded = verify_token(&token, SECRET).unwrap();
        assert_eq!(decoded.sub, 42);
        assert_eq!(decoded.iat, claims.iat);
        assert_eq!(decoded.exp, claims.exp);
    }

    #[test]
    fn expiry_is_one_hour_from_issuance_by_default() {
        let claims = Claims::new(1, 3600);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = issue_token(&Claims::new(1, 3600), SECRET).unwrap();
        assert!(matches!(
            verify_token(&token, "some-other-secret"),
            Err(TokenError::Invalid(_))
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        // Two hours in the past, well beyond the default validation leeway.
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: 1,
            iat: now - 10_800,
            exp: now - 7_200,
        };
        let token = issue_token(&claims, SECRET).unwrap();
        assert!(matches!(
            verify_token(&token, SECRET),
            Err(TokenError::Invalid(_))
        ));
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(matches!(
            verify_token("not.a.jwt", SECRET),
            Err(TokenError::Invalid(_))
        ));
    }

    #[test]
    fn empty_secret_is_refused_on_both_sides() {
        let claims = Claims::new(1, 3600);
        assert!(matches!(
            issue_token(&claims, ""),
            Err(TokenError::EmptySecret)
        ));
        assert!(matches!(
            verify_token("whatever", ""),
            Err(TokenError::EmptySecret)
        ));
    }
}
