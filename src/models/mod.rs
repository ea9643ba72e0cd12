pub mod application;
pub mod dashboard;
pub mod document;
pub mod interview;
pub mod user;
