//! Per-request authentication context.
//!
//! The session transport is pluggable: a [`SessionResolver`] turns the raw
//! `Cookie` header into a subject, and the admin-role lookup turns that into
//! an [`AuthContext`] the middleware can decide on.
use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use tracing::error;

use models::admin_user;

pub const SESSION_COOKIE: &str = "auth_token";
pub const REFRESH_COOKIE: &str = "refresh_token";

#[derive(Clone, Debug)]
pub struct SessionIdentity {
    pub subject: String,
}

/// Value object the redirect decision is made over.
#[derive(Clone, Debug)]
pub struct AuthContext {
    pub subject: String,
    pub is_admin: bool,
}

#[async_trait]
pub trait SessionResolver: Send + Sync {
    /// Resolve the raw `Cookie` header into a session identity, or `None`
    /// when there is no usable session.
    async fn resolve(&self, cookie_header: Option<&str>) -> Option<SessionIdentity>;
}

/// Default resolver: HS256 JWT carried in the `auth_token` cookie.
pub struct JwtSessionResolver {
    secret: String,
}

#[derive(Debug, Deserialize)]
struct Claims {
    sub: Option<String>,
    #[allow(dead_code)]
    exp: Option<usize>,
}

impl JwtSessionResolver {
    pub fn new(secret: impl Into<String>) -> Self {
        Self { secret: secret.into() }
    }
}

fn cookie_value<'a>(cookie_header: &'a str, name: &str) -> Option<&'a str> {
    for part in cookie_header.split(';') {
        let kv = part.trim();
        if let Some(rest) = kv.strip_prefix(name) {
            if let Some(value) = rest.strip_prefix('=') {
                if !value.is_empty() {
                    return Some(value);
                }
            }
        }
    }
    None
}

#[async_trait]
impl SessionResolver for JwtSessionResolver {
    async fn resolve(&self, cookie_header: Option<&str>) -> Option<SessionIdentity> {
        let token = cookie_value(cookie_header?, SESSION_COOKIE)?;
        let key = DecodingKey::from_secret(self.secret.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        match decode::<Claims>(token, &key, &validation) {
            Ok(data) => data.claims.sub.map(|subject| SessionIdentity { subject }),
            Err(_) => None,
        }
    }
}

/// Resolve the full context for one request: session first, then role.
///
/// A role-lookup error fails closed (treated as "no role") but is logged so
/// transient outages remain distinguishable from genuine denials.
pub async fn resolve_context(
    db: &DatabaseConnection,
    resolver: &dyn SessionResolver,
    cookie_header: Option<&str>,
) -> Option<AuthContext> {
    let identity = resolver.resolve(cookie_header).await?;
    let is_admin = match admin_user::find_by_subject(db, &identity.subject).await {
        Ok(row) => row.is_some(),
        Err(e) => {
            error!(subject = %identity.subject, error = %e, "admin role lookup failed; denying");
            false
        }
    };
    Some(AuthContext { subject: identity.subject, is_admin })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestClaims {
        sub: String,
        exp: usize,
        iat: usize,
    }

    fn token(secret: &str, sub: &str, exp_offset_secs: i64) -> String {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("clock")
            .as_secs() as i64;
        let claims = TestClaims {
            sub: sub.into(),
            exp: (now + exp_offset_secs).max(0) as usize,
            iat: now.max(0) as usize,
        };
        encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes()))
            .expect("encode")
    }

    #[tokio::test]
    async fn valid_cookie_resolves_subject() {
        let resolver = JwtSessionResolver::new("s3cret");
        let header = format!("theme=dark; auth_token={}", token("s3cret", "user-1", 3600));
        let identity = resolver.resolve(Some(&header)).await.expect("identity");
        assert_eq!(identity.subject, "user-1");
    }

    #[tokio::test]
    async fn expired_token_is_rejected() {
        let resolver = JwtSessionResolver::new("s3cret");
        let header = format!("auth_token={}", token("s3cret", "user-1", -3600));
        assert!(resolver.resolve(Some(&header)).await.is_none());
    }

    #[tokio::test]
    async fn wrong_secret_is_rejected() {
        let resolver = JwtSessionResolver::new("s3cret");
        let header = format!("auth_token={}", token("other", "user-1", 3600));
        assert!(resolver.resolve(Some(&header)).await.is_none());
    }

    #[tokio::test]
    async fn missing_header_or_cookie_is_rejected() {
        let resolver = JwtSessionResolver::new("s3cret");
        assert!(resolver.resolve(None).await.is_none());
        assert!(resolver.resolve(Some("theme=dark")).await.is_none());
        assert!(resolver.resolve(Some("auth_token=")).await.is_none());
    }
}
