use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

// ───── Database Models ───────────────────────────────────────────────

/// One entry of the `users` collection. The stored field is named
/// `password` but it only ever holds an Argon2 hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    #[serde(rename = "password")]
    pub password_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

// ───── Input & Validation ───────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Must be at least 8 characters"))]
    pub password: String,
}

impl RegisterRequest {
    /// Emails are stored and compared lowercased so a duplicate check
    /// cannot be sidestepped by changing the casing.
    pub fn normalized_email(&self) -> String {
        self.email.trim().to_lowercase()
    }

    pub fn prepare_for_insert(&self, password_hash: String) -> User {
        let now = Utc::now();
        User {
            id: None,
            email: self.normalized_email(),
            password_hash,
            name: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Login body. Fields default to empty so missing credentials surface as
/// the dedicated error instead of a decode failure.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

// ───── API Response Models ──────────────────────────────────────────

/// Public identity returned after register or login. The session token is
/// never part of this; it only travels in the http-only cookie.
#[derive(Debug, Clone, Serialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_lowercased_and_trimmed() {
        let request = RegisterRequest {
            email: "  User@Example.COM ".into(),
            password: "longenough".into(),
        };
        assert_eq!(request.normalized_email(), "user@example.com");
        let doc = request.prepare_for_insert("hash".into());
        assert_eq!(doc.email, "user@example.com");
        assert_eq!(doc.name, None);
    }

    #[test]
    fn short_passwords_fail_validation() {
        let request = RegisterRequest {
            email: "user@example.com".into(),
            password: "short".into(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }
}
