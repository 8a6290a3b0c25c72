use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::error::ResponseError;
use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::constants::AUTH_COOKIE;
use crate::entities::user::{LoginRequest, RegisterRequest};
use crate::errors::AppError;
use crate::use_cases::extractors::AuthClaims;
use crate::AppState;

/// Builds the http-only session cookie. `Secure` follows the runtime
/// environment so local development over plain http still works.
fn session_cookie(token: String, secure: bool, max_age_secs: i64) -> Cookie<'static> {
    Cookie::build(AUTH_COOKIE, token)
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(Duration::seconds(max_age_secs))
        .finish()
}

#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    user: web::Json<RegisterRequest>
) -> impl Responder {
    match state.auth_handler.register(user.into_inner()).await {
        Ok(auth_session) => {
            let cookie =
                session_cookie(auth_session.token, state.cookie_secure, state.session_ttl_secs);
            HttpResponse::Created().cookie(cookie).json(serde_json::json!({
                "success": true,
                "message": "Registration successful",
                "user": auth_session.user,
            }))
        }
        Err(e) => registration_error(e),
    }
}

fn registration_error(e: AppError) -> HttpResponse {
    match e {
        AppError::ValidationError(_) | AppError::Conflict(_) => e.to_http_response(),
        other => {
            tracing::error!("Registration failed: {}", other);
            HttpResponse::InternalServerError()
                .json(serde_json::json!({"error": "Failed to process registration request"}))
        }
    }
}

#[post("/api")]
pub async fn login(
    state: web::Data<AppState>,
    credentials: web::Json<LoginRequest>
) -> impl Responder {
    match state.auth_handler.login(credentials.into_inner()).await {
        Ok(auth_session) => {
            let cookie =
                session_cookie(auth_session.token, state.cookie_secure, state.session_ttl_secs);
            HttpResponse::Ok().cookie(cookie).json(serde_json::json!({
                "success": true,
                "message": "Login successful",
                "user": auth_session.user,
            }))
        }
        Err(e) => e.error_response(),
    }
}

#[derive(Debug, Deserialize)]
pub struct CollectionQuery {
    collection: Option<String>,
}

/// Remote look at a content collection, for checking from a phone what
/// actually landed in the database. Requires a signed-in session.
#[get("/api")]
pub async fn collections(
    _claims: AuthClaims,
    state: web::Data<AppState>,
    query: web::Query<CollectionQuery>,
) -> impl Responder {
    let name = query.collection.as_deref().unwrap_or("experiences");
    match state.portfolio_handler.collection_dump(name).await {
        Ok(payload) => HttpResponse::Ok().json(payload),
        Err(e @ AppError::InvalidInput(_)) => e.to_http_response(),
        Err(e) => {
            tracing::error!("Collection dump failed: {}", e);
            HttpResponse::InternalServerError()
                .json(serde_json::json!({"error": "Failed to connect to database"}))
        }
    }
}

/// Clears the session cookie. Deliberately unauthenticated so an expired
/// session can still be signed out.
#[post("/logout")]
pub async fn logout() -> impl Responder {
    let mut cookie = Cookie::build(AUTH_COOKIE, "")
        .http_only(true)
        .path("/")
        .finish();
    cookie.make_removal();

    HttpResponse::Ok().cookie(cookie).json(serde_json::json!({
        "success": true,
        "message": "Logged out successfully",
    }))
}

/// Lets the front end ask whether its cookie still holds, since the
/// http-only flag keeps the token itself out of reach.
#[get("/api/session")]
pub async fn session(claims: Option<AuthClaims>) -> impl Responder {
    match claims {
        Some(AuthClaims(claims)) => HttpResponse::Ok().json(serde_json::json!({
            "authenticated": true,
            "user": {"id": claims.user_id, "email": claims.email},
        })),
        None => HttpResponse::Ok().json(serde_json::json!({"authenticated": false})),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_locks_down_browser_access() {
        let cookie = session_cookie("tok".to_string(), true, 24 * 3600);

        assert_eq!(cookie.name(), AUTH_COOKIE);
        assert_eq!(cookie.value(), "tok");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::hours(24)));
    }

    #[test]
    fn session_cookie_relaxes_secure_for_local_http() {
        let cookie = session_cookie("tok".to_string(), false, 3600);

        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(3600)));
    }
}
