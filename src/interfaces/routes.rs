use actix_web::web;

use crate::handlers::home::home;
use crate::handlers::system::health_check;

mod auth;
mod content;
mod json_error;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);

    // Session routes first: /api/session must win over the /api content scope.
    cfg.configure(auth::config_routes);
    cfg.configure(content::config_routes);

    cfg.configure(json_error::config_routes);
}
