pub mod content;
pub mod entities;
pub mod month;
pub mod text;
pub mod use_cases;
