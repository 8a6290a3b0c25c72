use actix_web::web;

use crate::handlers::content;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(content::submit_experience)
            .service(content::submit_project)
    );
}
