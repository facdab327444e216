use log::{info, warn};
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_host: String,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub data_dir: String,
    pub database_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_host: "localhost".to_string(),
            db_user: "root".to_string(),
            db_password: String::new(),
            db_name: "gifted_eternity".to_string(),
            data_dir: "./data".to_string(),
            database_url: "./data/gifted_eternity.db".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let db_host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
        let db_user = env::var("DB_USER").unwrap_or_else(|_| "root".to_string());
        let db_password = env::var("DB_PASSWORD").unwrap_or_default();
        let db_name = env::var("DB_NAME").unwrap_or_else(|_| "gifted_eternity".to_string());
        let data_dir = env::var("GIFTED_DATA_DIR").unwrap_or_else(|_| "./data".to_string());

        // The storage backend is an embedded database file; the host setting
        // is honored for compatibility with server-style deployments but only
        // localhost is meaningful here.
        if db_host != "localhost" && db_host != "127.0.0.1" {
            warn!("DB_HOST is set to '{db_host}' but the database is a local file; ignoring host");
        }

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| format!("{data_dir}/{db_name}.db"));

        info!("Configuration loaded:");
        info!("  Database Host: {db_host}");
        info!("  Database User: {db_user}");
        info!("  Database Name: {db_name}");
        info!("  Data Directory: {data_dir}");
        info!("  Database URL: {database_url}");

        Self {
            db_host,
            db_user,
            db_password,
            db_name,
            data_dir,
            database_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.db_host, "localhost");
        assert_eq!(config.db_user, "root");
        assert_eq!(config.db_password, "");
        assert_eq!(config.db_name, "gifted_eternity");
        assert_eq!(config.data_dir, "./data");
        assert_eq!(config.database_url, "./data/gifted_eternity.db");
    }

    #[test]
    fn test_database_url_derivation() {
        let data_dir = "/tmp/gifted";
        let db_name = "gifted_eternity";
        assert_eq!(
            format!("{data_dir}/{db_name}.db"),
            "/tmp/gifted/gifted_eternity.db"
        );
    }
}
