//! Admin account model, token claims and the authorization policy

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Admin credential record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Admin {
    pub id: Uuid,
    /// Stored lowercase
    pub email: String,
    /// Hashed password (argon2)
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Public view of an admin account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct AdminInfo {
    pub id: Uuid,
    pub email: String,
}

impl From<&Admin> for AdminInfo {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id,
            email: admin.email.clone(),
        }
    }
}

/// Normalize an email for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Admin id
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Roles known to the authorization policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
}

/// Maps an authenticated subject to its role.
///
/// Accounts are provisioned out-of-band and every one of them administers
/// the site, so each verified subject is an admin.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessPolicy;

impl AccessPolicy {
    pub fn role_for(&self, _subject: Uuid) -> Role {
        Role::Admin
    }

    pub fn identify(&self, subject: Uuid) -> Identity {
        Identity {
            subject,
            role: self.role_for(subject),
        }
    }
}

/// Identity attached to an authenticated request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub subject: Uuid,
    pub role: Role,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    // Authorization checks
    pub fn require_admin(&self) -> AppResult<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::Forbidden("Admin access required".to_string()))
        }
    }
}

/// Sign-in request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SignInRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl SignInRequest {
    /// Normalized email and raw password, both required
    pub fn validate(&self) -> AppResult<(String, &str)> {
        let email = self.email.as_deref().map(normalize_email).unwrap_or_default();
        let password = self.password.as_deref().unwrap_or_default();
        if email.is_empty() || password.is_empty() {
            return Err(AppError::Validation("Email and password required".to_string()));
        }
        Ok((email, password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_subject_is_admin() {
        let identity = AccessPolicy.identify(Uuid::new_v4());
        assert_eq!(identity.role, Role::Admin);
        assert!(identity.require_admin().is_ok());
    }

    #[test]
    fn test_sign_in_validation() {
        let request = SignInRequest {
            email: Some("  Owner@Studio.ART ".into()),
            password: Some("secret".into()),
        };
        let (email, password) = request.validate().unwrap();
        assert_eq!(email, "owner@studio.art");
        assert_eq!(password, "secret");

        let request = SignInRequest {
            email: Some("owner@studio.art".into()),
            password: Some(String::new()),
        };
        assert!(matches!(request.validate(), Err(AppError::Validation(_))));

        assert!(SignInRequest::default().validate().is_err());
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let admin = Admin {
            id: Uuid::new_v4(),
            email: "owner@studio.art".into(),
            password_hash: "$argon2id$...".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&admin).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "owner@studio.art");
    }
}
