//! Bearer token identity resolution.
//!
//! Verifies an HS256 JWT and extracts the caller's user id. The favorites
//! service re-validates the id's shape, so this module only needs to decide
//! *which* claim holds it.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use secrecy::ExposeSecret;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::JwtConfig;

/// Claims consulted for the user id, in priority order.
pub const USER_ID_CLAIMS: &[&str] = &[
    "sub",
    "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier",
    "nameid",
];

/// Errors that can occur while resolving an identity.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// No bearer token on the request.
    #[error("missing bearer token")]
    MissingToken,

    /// Token failed signature, expiry, or audience checks.
    #[error("invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// Token is valid but carries no usable user id claim.
    #[error("token has no user id claim")]
    MissingSubject,
}

/// Verifies bearer tokens and yields the caller's raw user id.
#[derive(Clone)]
pub struct IdentityResolver {
    key: DecodingKey,
    validation: Validation,
}

impl IdentityResolver {
    /// Build a resolver from JWT configuration.
    #[must_use]
    pub fn new(config: &JwtConfig) -> Self {
        let key = DecodingKey::from_secret(config.secret.expose_secret().as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        match &config.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        Self { key, validation }
    }

    /// Verify `token` and return the user id it asserts.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::InvalidToken` if verification fails and
    /// `IdentityError::MissingSubject` if no user id claim is present.
    pub fn resolve(&self, token: &str) -> Result<String, IdentityError> {
        let data = decode::<Map<String, Value>>(token, &self.key, &self.validation)?;
        user_id_from_claims(&data.claims).ok_or(IdentityError::MissingSubject)
    }
}

impl std::fmt::Debug for IdentityResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityResolver")
            .field("key", &"[REDACTED]")
            .field("validation", &self.validation)
            .finish()
    }
}

/// Pick the first non-blank string claim from [`USER_ID_CLAIMS`].
fn user_id_from_claims(claims: &Map<String, Value>) -> Option<String> {
    USER_ID_CLAIMS
        .iter()
        .filter_map(|name| claims.get(*name).and_then(Value::as_str))
        .find(|value| !value.trim().is_empty())
        .map(String::from)
}

/// Extract the token from an `Authorization: Bearer <token>` header value.
#[must_use]
pub fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use jsonwebtoken::{EncodingKey, Header, encode};
    use secrecy::SecretString;
    use serde_json::json;

    use super::*;

    const SECRET: &str = "aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6";
    const USER: &str = "7f8c2a4e-1b3d-4c5e-9f60-718293a4b5c6";

    fn resolver(audience: Option<&str>) -> IdentityResolver {
        IdentityResolver::new(&JwtConfig {
            secret: SecretString::from(SECRET),
            audience: audience.map(String::from),
        })
    }

    fn token(claims: &Value, secret: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn future_exp() -> i64 {
        chrono::Utc::now().timestamp() + 3600
    }

    #[test]
    fn test_resolve_sub_claim() {
        let jwt = token(&json!({ "sub": USER, "exp": future_exp() }), SECRET);
        assert_eq!(resolver(None).resolve(&jwt).unwrap(), USER);
    }

    #[test]
    fn test_resolve_falls_back_to_nameidentifier() {
        let jwt = token(
            &json!({
                "sub": "  ",
                "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier": USER,
                "exp": future_exp(),
            }),
            SECRET,
        );
        assert_eq!(resolver(None).resolve(&jwt).unwrap(), USER);
    }

    #[test]
    fn test_resolve_missing_subject() {
        let jwt = token(&json!({ "email": "a@b.c", "exp": future_exp() }), SECRET);
        assert!(matches!(
            resolver(None).resolve(&jwt),
            Err(IdentityError::MissingSubject)
        ));
    }

    #[test]
    fn test_resolve_rejects_wrong_secret() {
        let jwt = token(
            &json!({ "sub": USER, "exp": future_exp() }),
            "zZ9#qQ8@wW7!eE6$rR5%tT4^yY3&uU2*",
        );
        assert!(matches!(
            resolver(None).resolve(&jwt),
            Err(IdentityError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_resolve_rejects_expired() {
        let exp = chrono::Utc::now().timestamp() - 3600;
        let jwt = token(&json!({ "sub": USER, "exp": exp }), SECRET);
        assert!(matches!(
            resolver(None).resolve(&jwt),
            Err(IdentityError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_resolve_checks_audience_when_configured() {
        let jwt = token(
            &json!({ "sub": USER, "aud": "authenticated", "exp": future_exp() }),
            SECRET,
        );
        assert!(resolver(Some("authenticated")).resolve(&jwt).is_ok());
        assert!(resolver(Some("service_role")).resolve(&jwt).is_err());
        assert!(resolver(None).resolve(&jwt).is_ok());
    }

    #[test]
    fn test_bearer_token() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(bearer_token("bearer  abc"), Some("abc"));
        assert_eq!(bearer_token("Basic abc"), None);
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("abc"), None);
    }
}
