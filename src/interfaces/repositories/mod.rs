pub mod experience;
pub mod mongo_repo;
pub mod project;
pub mod token;
pub mod user;
