use mongodb::Database;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod background_task;

pub use domain::{content, entities, month, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{auth, cache, db, media};

use auth::jwt::JwtService;
use cache::HomeCache;
use media::CloudinaryUploader;
use repositories::mongo_repo::{MongoExperienceRepo, MongoProjectRepo, MongoUserRepo};
use use_cases::auth::AuthHandler;
use use_cases::content::ContentHandler;
use use_cases::portfolio::PortfolioHandler;

pub struct AppState {
    pub auth_handler: AppAuthHandler,
    pub content_handler: AppContentHandler,
    pub portfolio_handler: AppPortfolioHandler,
    pub home_cache: HomeCache,
    pub cookie_secure: bool,
    pub session_ttl_secs: i64,
}

pub type AppAuthHandler = AuthHandler<MongoUserRepo, JwtService>;
pub type AppContentHandler = ContentHandler<MongoExperienceRepo, MongoProjectRepo, CloudinaryUploader>;
pub type AppPortfolioHandler = PortfolioHandler<MongoExperienceRepo, MongoProjectRepo>;

impl AppState {
    pub fn new(config: &settings::AppConfig, db: Database) -> Self {
        let jwt_service = JwtService::new(config);
        let user_repo = MongoUserRepo::new(db.clone());
        let auth_handler = AuthHandler::new(user_repo, jwt_service);

        let content_handler = ContentHandler::new(
            MongoExperienceRepo::new(db.clone()),
            MongoProjectRepo::new(db.clone()),
            CloudinaryUploader::new(config),
        );

        let portfolio_handler = PortfolioHandler::new(
            MongoExperienceRepo::new(db.clone()),
            MongoProjectRepo::new(db),
        );

        AppState {
            auth_handler,
            content_handler,
            portfolio_handler,
            home_cache: HomeCache::default(),
            cookie_secure: config.is_production(),
            session_ttl_secs: config.session_ttl_hours * 3600,
        }
    }
}
