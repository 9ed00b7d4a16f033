use anyhow::{Context, Result};
use chrono::Utc;
use contracts::system::auth::TokenClaims;
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::OnceCell;

use crate::shared::config::AuthConfig;

static AUTH_CONFIG: OnceCell<AuthConfig> = OnceCell::new();

/// Install the signing settings once at startup
pub fn initialize(config: AuthConfig) -> Result<()> {
    AUTH_CONFIG
        .set(config)
        .map_err(|_| anyhow::anyhow!("JWT settings already initialized"))
}

fn auth_config() -> Result<&'static AuthConfig> {
    AUTH_CONFIG
        .get()
        .context("JWT settings are not initialized")
}

/// Why a bearer token was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenRejection {
    Expired,
    Malformed,
}

impl TokenRejection {
    pub fn reason(&self) -> &'static str {
        match self {
            TokenRejection::Expired => "jwt expired",
            TokenRejection::Malformed => "jwt malformed",
        }
    }
}

/// Generate an access token for `username` with the configured lifetime
pub fn generate_access_token(username: &str) -> Result<String> {
    let config = auth_config()?;
    encode_token(username, &config.jwt_secret, config.token_lifetime_hours)
}

/// Validate a token against the configured secret
pub fn validate_token(token: &str) -> Result<TokenClaims, TokenRejection> {
    let config = auth_config().map_err(|_| TokenRejection::Malformed)?;
    decode_token(token, &config.jwt_secret)
}

pub fn encode_token(username: &str, secret: &str, lifetime_hours: i64) -> Result<String> {
    let now = Utc::now();
    let exp = (now + chrono::Duration::hours(lifetime_hours)).timestamp() as usize;
    let iat = now.timestamp() as usize;

    let claims = TokenClaims {
        sub: username.to_string(),
        exp,
        iat,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to encode JWT token")
}

pub fn decode_token(token: &str, secret: &str) -> Result<TokenClaims, TokenRejection> {
    decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenRejection::Expired,
        _ => TokenRejection::Malformed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_keeps_username() {
        let token = encode_token("foo", "secret", 1).unwrap();
        let claims = decode_token(&token, "secret").unwrap();
        assert_eq!(claims.sub, "foo");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_is_malformed() {
        let token = encode_token("foo", "secret", 1).unwrap();
        assert_eq!(
            decode_token(&token, "other").unwrap_err(),
            TokenRejection::Malformed
        );
    }

    #[test]
    fn test_garbage_is_malformed() {
        assert_eq!(
            decode_token("not.a.jwt", "secret").unwrap_err().reason(),
            "jwt malformed"
        );
    }

    #[test]
    fn test_expired_token() {
        // well past the default 60s leeway
        let token = encode_token("foo", "secret", -2).unwrap();
        assert_eq!(
            decode_token(&token, "secret").unwrap_err(),
            TokenRejection::Expired
        );
    }
}
