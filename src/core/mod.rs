pub mod config;
pub mod display;
pub mod document;
pub mod errors;
pub mod types;
