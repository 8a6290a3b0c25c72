use serde::{Deserialize, Serialize};

use crate::domain::entities::user::AuthUser;

/// JWT payload for one signed-in session.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub user_id: String,
    pub email: String,
    pub iat: usize,
    pub exp: usize,
}

/// Outcome of a successful register or login: the identity for the
/// response body and the signed token destined for the cookie.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: AuthUser,
    pub token: String,
}
