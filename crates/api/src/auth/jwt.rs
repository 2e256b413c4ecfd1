//! Bearer access tokens.
//!
//! A token is an HS256 JWT whose subject is the user's database id. There
//! are no refresh tokens; a client whose token expires logs in again.

use chrono::{Duration, Utc};
use holonet_core::types::DbId;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default access token lifetime in minutes.
const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 15;

/// Clock skew tolerated when checking `exp`.
const LEEWAY_SECS: u64 = 30;

/// Payload carried by every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// The user's database id.
    pub sub: DbId,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Random token id, so two tokens minted in the same second differ.
    pub jti: String,
}

impl Claims {
    fn for_user(user_id: DbId, lifetime: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id,
            exp: (now + lifetime).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }
}

/// Signing secret and token lifetime.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry_mins: i64,
}

impl JwtConfig {
    /// Load from the environment.
    ///
    /// | Env Var                  | Required | Default |
    /// |--------------------------|----------|---------|
    /// | `JWT_SECRET`             | **yes**  | --      |
    /// | `JWT_ACCESS_EXPIRY_MINS` | no       | `15`    |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is unset or empty, or the expiry is not an
    /// integer.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let access_token_expiry_mins = match std::env::var("JWT_ACCESS_EXPIRY_MINS") {
            Ok(raw) => raw
                .parse()
                .expect("JWT_ACCESS_EXPIRY_MINS must be a valid i64"),
            Err(_) => DEFAULT_ACCESS_EXPIRY_MINS,
        };

        Self {
            secret,
            access_token_expiry_mins,
        }
    }

    pub fn lifetime(&self) -> Duration {
        Duration::minutes(self.access_token_expiry_mins)
    }

    /// Access token lifetime in seconds, as reported to clients.
    pub fn expires_in_secs(&self) -> i64 {
        self.lifetime().num_seconds()
    }

    fn encoding_key(&self) -> EncodingKey {
        EncodingKey::from_secret(self.secret.as_bytes())
    }

    fn decoding_key(&self) -> DecodingKey {
        DecodingKey::from_secret(self.secret.as_bytes())
    }
}

/// Mint an access token identifying `user_id`.
pub fn generate_access_token(
    user_id: DbId,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims::for_user(user_id, config.lifetime());
    encode(&Header::new(Algorithm::HS256), &claims, &config.encoding_key())
}

/// Check signature and expiry, returning the embedded [`Claims`].
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = LEEWAY_SECS;

    decode::<Claims>(token, &config.decoding_key(), &validation).map(|data| data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str) -> JwtConfig {
        JwtConfig {
            secret: secret.to_string(),
            access_token_expiry_mins: 15,
        }
    }

    fn sign(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn token_round_trips_user_id() {
        let config = config("holonet-test-secret");
        let token = generate_access_token(42, &config).unwrap();

        let claims = validate_token(&token, &config).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.exp - claims.iat, 15 * 60);
    }

    #[test]
    fn tokens_for_same_user_differ() {
        let config = config("holonet-test-secret");
        let a = generate_access_token(7, &config).unwrap();
        let b = generate_access_token(7, &config).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn expired_token_is_rejected() {
        let claims = Claims::for_user(1, Duration::minutes(-10));
        let token = sign(&claims, "holonet-test-secret");

        assert!(validate_token(&token, &config("holonet-test-secret")).is_err());
    }

    #[test]
    fn token_within_leeway_is_accepted() {
        let claims = Claims::for_user(1, Duration::seconds(-5));
        let token = sign(&claims, "holonet-test-secret");

        assert!(validate_token(&token, &config("holonet-test-secret")).is_ok());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = generate_access_token(1, &config("secret-alpha")).unwrap();
        assert!(validate_token(&token, &config("secret-bravo")).is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(validate_token("not.a.jwt", &config("holonet-test-secret")).is_err());
    }

    #[test]
    fn expires_in_matches_lifetime() {
        let config = JwtConfig {
            secret: "s".into(),
            access_token_expiry_mins: 60,
        };
        assert_eq!(config.expires_in_secs(), 3600);
    }
}
