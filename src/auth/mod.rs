use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub tenant: String,
    pub user: String,
    pub database: String,
    pub access: String,
    pub user_id: Uuid,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn with_expiry(
        tenant: String,
        user: String,
        database: String,
        access: String,
        user_id: Uuid,
        expiry_hours: u64,
    ) -> Self {
        let now = Utc::now();
        let exp = (now + Duration::hours(expiry_hours as i64)).timestamp();

        Self {
            tenant,
            user,
            database,
            access,
            user_id,
            exp,
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("JWT secret not configured")]
    MissingSecret,
    #[error("JWT generation error: {0}")]
    TokenGeneration(String),
    #[error("Invalid JWT token: {0}")]
    InvalidToken(String),
}

pub fn generate_jwt(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    if secret.is_empty() {
        return Err(JwtError::MissingSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), claims, &encoding_key)
        .map_err(|e| JwtError::TokenGeneration(e.to_string()))
}

pub fn validate_jwt(token: &str, secret: &str) -> Result<Claims, JwtError> {
    if secret.is_empty() {
        return Err(JwtError::MissingSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
        .map_err(|e| JwtError::InvalidToken(e.to_string()))?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims() -> Claims {
        Claims::with_expiry(
            "acme".to_string(),
            "admin".to_string(),
            "tenant_acme".to_string(),
            "full".to_string(),
            Uuid::new_v4(),
            1,
        )
    }

    #[test]
    fn token_round_trips_with_same_secret() {
        let token = generate_jwt(&claims(), "s3cret").unwrap();
        let decoded = validate_jwt(&token, "s3cret").unwrap();
        assert_eq!(decoded.tenant, "acme");
        assert_eq!(decoded.database, "tenant_acme");
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let token = generate_jwt(&claims(), "s3cret").unwrap();
        assert!(matches!(validate_jwt(&token, "other"), Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn empty_secret_is_refused() {
        assert!(matches!(generate_jwt(&claims(), ""), Err(JwtError::MissingSecret)));
        assert!(matches!(validate_jwt("abc", ""), Err(JwtError::MissingSecret)));
    }
}
