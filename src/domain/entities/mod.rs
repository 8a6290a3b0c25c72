pub mod experience;
pub mod project;
pub mod token;
pub mod user;
