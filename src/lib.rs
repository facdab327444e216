pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod schema;
pub mod seed;

pub use config::AppConfig;
pub use database::DatabaseService;
pub use error::DataError;
