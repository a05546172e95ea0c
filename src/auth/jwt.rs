use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, Result};

/// Seconds of clock skew tolerated between us and the identity provider.
const CLOCK_LEEWAY_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    #[default]
    Access,
    Refresh,
}

impl TokenType {
    fn lifetime(self) -> Duration {
        match self {
            TokenType::Access => Duration::hours(1),
            TokenType::Refresh => Duration::days(7),
        }
    }
}

/// Claims of a provider-issued session token. `sub` is the user id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub exp: i64,
    pub iat: i64,
    #[serde(default)]
    pub token_type: TokenType,
}

/// HS256 tokens under the secret shared with the identity provider.
///
/// The server only needs verification; signing exists so tests and local
/// tooling can mint tokens the provider would have issued.
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtService {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = CLOCK_LEEWAY_SECS;
        validation.validate_aud = false;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn generate_access_token(&self, user_id: Uuid, email: Option<&str>) -> Result<String> {
        self.sign(user_id, email, TokenType::Access)
    }

    pub fn generate_refresh_token(&self, user_id: Uuid, email: Option<&str>) -> Result<String> {
        self.sign(user_id, email, TokenType::Refresh)
    }

    fn sign(&self, user_id: Uuid, email: Option<&str>, token_type: TokenType) -> Result<String> {
        let issued_at = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.map(str::to_string),
            exp: (issued_at + token_type.lifetime()).timestamp(),
            iat: issued_at.timestamp(),
            token_type,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Auth(format!("Failed to sign token: {}", e)))
    }

    /// Checks signature and expiry of any token type.
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::Auth(format!("Invalid token: {}", e)))
    }

    pub fn verify_access_token(&self, token: &str) -> Result<Claims> {
        let claims = self.verify_token(token)?;
        if claims.token_type != TokenType::Access {
            return Err(AppError::Auth(format!(
                "Expected an access token, got {:?}",
                claims.token_type
            )));
        }
        Ok(claims)
    }
}
