//! Admin authentication service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use super::tokens::TokenService;
use crate::{
    error::{AppError, AppResult},
    models::admin::{normalize_email, AccessPolicy, Admin, Identity},
    repository::Repository,
};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Argon2id hash with the default cost parameters, checked when the email is
/// unknown so both failure paths spend the same time hashing
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    tokens: TokenService,
    policy: AccessPolicy,
}

impl AuthService {
    pub fn new(repository: Repository, tokens: TokenService) -> Self {
        Self {
            repository,
            tokens,
            policy: AccessPolicy,
        }
    }

    /// Check credentials and return the admin with a fresh token.
    /// Unknown emails and wrong passwords fail identically.
    pub async fn sign_in(&self, email: &str, password: &str) -> AppResult<(Admin, String)> {
        let admin = self.repository.admins.get_by_email(&normalize_email(email)).await?;

        let admin = match check_credentials(admin, password) {
            Some(admin) => admin,
            None => {
                tracing::warn!("Rejected sign-in for {}", email);
                return Err(AppError::Authentication(INVALID_CREDENTIALS.to_string()));
            }
        };

        let token = self.tokens.issue(admin.id)?;
        tracing::info!("Admin {} signed in", admin.email);
        Ok((admin, token))
    }

    /// Resolve a bearer token into a request identity
    pub fn authenticate(&self, token: &str) -> Option<Identity> {
        self.tokens.verify(token).map(|subject| self.policy.identify(subject))
    }

    /// Load the admin behind an identity
    pub async fn current_admin(&self, identity: &Identity) -> AppResult<Admin> {
        self.repository
            .admins
            .get_by_id(identity.subject)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Create the admin or reset its password
    pub async fn ensure_admin(&self, email: &str, password: &str) -> AppResult<Admin> {
        let email = normalize_email(email);
        if email.is_empty() || password.is_empty() {
            return Err(AppError::Validation("Admin email and password required".to_string()));
        }
        let hash = hash_password(password)?;
        self.repository.admins.upsert(&email, &hash).await
    }
}

/// Keep the admin only when the password matches. A missing admin still
/// costs one Argon2 verification.
fn check_credentials(admin: Option<Admin>, password: &str) -> Option<Admin> {
    match admin {
        Some(admin) => verify_password(&admin.password_hash, password).then_some(admin),
        None => {
            verify_password(DUMMY_HASH, password);
            None
        }
    }
}

/// Hash a password using Argon2
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Check a password against a stored Argon2 hash. An unreadable hash never
/// matches.
pub fn verify_password(hash: &str, password: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::error!("Stored password hash is not a valid PHC string: {}", e);
            return false;
        }
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}
