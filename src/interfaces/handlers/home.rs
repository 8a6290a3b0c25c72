use actix_web::{get, web, HttpResponse, Responder};

use crate::AppState;

/// Serves the assembled home page payload. The static sections never
/// change at runtime, so the whole document is cached until a submission
/// invalidates it.
#[get("/")]
pub async fn home(state: web::Data<AppState>) -> impl Responder {
    if let Some(payload) = state.home_cache.get() {
        return HttpResponse::Ok().json(payload);
    }

    match state.portfolio_handler.home_payload().await {
        Ok(payload) => {
            state.home_cache.store(payload.clone());
            HttpResponse::Ok().json(payload)
        }
        Err(e) => e.to_http_response(),
    }
}
