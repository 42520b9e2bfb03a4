pub mod files;
pub mod query;
