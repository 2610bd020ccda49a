//! Signed, time-limited identity tokens (HS256 JWT)

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::admin::Claims,
};

#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime: Duration,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            lifetime: Duration::hours(config.jwt_expiration_hours as i64),
        }
    }

    /// Issue a token for `subject`, valid from now
    pub fn issue(&self, subject: Uuid) -> AppResult<String> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token as if it had been signed at `issued_at`
    pub fn issue_at(&self, subject: Uuid, issued_at: DateTime<Utc>) -> AppResult<String> {
        let claims = Claims {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.lifetime).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    /// Subject bound in `token`, or `None` if the token is malformed,
    /// wrongly signed, expired or names no valid subject.
    pub fn verify(&self, token: &str) -> Option<Uuid> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default()).ok()?;
        Uuid::parse_str(&data.claims.sub).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(secret: &str) -> TokenService {
        TokenService::new(&AuthConfig {
            jwt_secret: secret.to_string(),
            jwt_expiration_hours: 168,
        })
    }

    #[test]
    fn test_issue_then_verify() {
        let tokens = service("s3cret");
        let subject = Uuid::new_v4();
        let token = tokens.issue(subject).unwrap();
        assert_eq!(tokens.verify(&token), Some(subject));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = service("one").issue(Uuid::new_v4()).unwrap();
        assert_eq!(service("two").verify(&token), None);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let tokens = service("s3cret");
        let eight_days_ago = Utc::now() - Duration::days(8);
        let token = tokens.issue_at(Uuid::new_v4(), eight_days_ago).unwrap();
        assert_eq!(tokens.verify(&token), None);
    }

    #[test]
    fn test_token_still_valid_within_window() {
        let tokens = service("s3cret");
        let subject = Uuid::new_v4();
        let six_days_ago = Utc::now() - Duration::days(6);
        let token = tokens.issue_at(subject, six_days_ago).unwrap();
        assert_eq!(tokens.verify(&token), Some(subject));
    }

    #[test]
    fn test_garbage_is_rejected() {
        let tokens = service("s3cret");
        assert_eq!(tokens.verify(""), None);
        assert_eq!(tokens.verify("not.a.jwt"), None);
        assert_eq!(tokens.verify("eyJhbGciOiJIUzI1NiJ9.e30.c2ln"), None);
    }

    #[test]
    fn test_non_uuid_subject_is_rejected() {
        let tokens = service("s3cret");
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "42".to_string(),
            iat: now,
            exp: now + 3600,
        };
        let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(b"s3cret")).unwrap();
        assert_eq!(tokens.verify(&token), None);
    }
}
