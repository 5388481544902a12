//! JWT access-token validation.
//!
//! Tokens are issued by the external identity provider and arrive as
//! HS256-signed JWTs carrying a [`Claims`] payload. This server only
//! verifies them; there is no token issuance or refresh flow here.

use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the provider-issued user identity (UUID), matched to a
    /// profile row via `users.auth_user_id`.
    pub sub: Uuid,
    /// The user's email address, used to seed a profile on first access.
    pub email: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

/// Configuration for JWT token validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret shared with the identity provider.
    pub secret: String,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var      | Required |
    /// |--------------|----------|
    /// | `JWT_SECRET` | **yes**  |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        Self { secret }
    }
}

/// Validate and decode an access token, returning the embedded [`Claims`].
///
/// Validates the signature and expiration automatically.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use jsonwebtoken::errors::ErrorKind;
    use jsonwebtoken::{encode, EncodingKey, Header};

    use super::*;

    /// Helper to build a test config with a known secret.
    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
        }
    }

    /// Sign claims the way the identity provider would.
    fn sign(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("encoding should succeed")
    }

    #[test]
    fn test_validate_provider_issued_token() {
        let config = test_config();
        let now = chrono::Utc::now().timestamp();
        let sub = Uuid::new_v4();
        let claims = Claims {
            sub,
            email: "ada@example.com".to_string(),
            exp: now + 900,
            iat: now,
        };

        let token = sign(&claims, &config.secret);
        let decoded = validate_token(&token, &config).expect("token validation should succeed");
        assert_eq!(decoded.sub, sub);
        assert_eq!(decoded.email, "ada@example.com");
        assert!(decoded.exp > decoded.iat);
    }

    #[test]
    fn test_expired_token_fails() {
        let config = test_config();

        // Expired well beyond the default 60-second leeway.
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4(),
            email: "ada@example.com".to_string(),
            exp: now - 300,
            iat: now - 600,
        };

        let token = sign(&claims, &config.secret);
        let err = validate_token(&token, &config).expect_err("expired token must fail");
        assert_matches!(err.kind(), ErrorKind::ExpiredSignature);
    }

    #[test]
    fn test_different_secrets_fail() {
        let config_a = JwtConfig {
            secret: "secret-alpha".to_string(),
        };
        let config_b = JwtConfig {
            secret: "secret-bravo".to_string(),
        };

        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4(),
            email: "ada@example.com".to_string(),
            exp: now + 900,
            iat: now,
        };

        let token = sign(&claims, &config_a.secret);
        let result = validate_token(&token, &config_b);
        assert!(
            result.is_err(),
            "token signed with a different secret must fail"
        );
    }
}
