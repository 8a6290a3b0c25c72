use actix_web::web;

use crate::handlers::auth;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(auth::register);
    cfg.service(
        web::scope("/login")
            .service(auth::login)
            .service(auth::collections)
    );
    cfg.service(auth::logout);
    cfg.service(auth::session);
}
