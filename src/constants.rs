use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Session cookie name, shared by the issuing handlers and the extractor.
pub const AUTH_COOKIE: &str = "auth-token";

pub const EXPERIENCES_COLLECTION: &str = "experiences";
pub const PROJECTS_COLLECTION: &str = "projects";
pub const USERS_COLLECTION: &str = "users";

/// Caps for single-line submission fields and for the free-text areas.
pub const SHORT_FIELD_MAX: usize = 100;
pub const LONG_FIELD_MAX: usize = 1000;
