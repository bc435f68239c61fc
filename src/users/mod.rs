pub mod import;
pub mod repo;
pub mod repo_types;
pub mod schema;
