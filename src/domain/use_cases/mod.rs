pub mod auth;
pub mod content;
pub mod extractors;
pub mod portfolio;
