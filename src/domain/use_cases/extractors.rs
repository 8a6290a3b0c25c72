use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::constants::AUTH_COOKIE;
use crate::{entities::token::Claims, errors::AuthError, AppState};

/// Extractor for authenticated claims, verifying the session cookie.
/// Returns 401 if the cookie is missing, invalid, or expired.
/// Usage: Add `claims: AuthClaims` as a parameter to your handler function.
#[derive(Debug)]
pub struct AuthClaims(pub Claims);

impl FromRequest for AuthClaims {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(claims_from_cookie(req).map(AuthClaims).map_err(Into::into))
    }
}

fn claims_from_cookie(req: &HttpRequest) -> Result<Claims, AuthError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or(AuthError::MissingJwtService)?;
    let cookie = req.cookie(AUTH_COOKIE).ok_or(AuthError::MissingToken)?;
    let token_data = state.auth_handler.token_service.decode_jwt(cookie.value())?;
    Ok(token_data.claims)
}
