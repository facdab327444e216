//! Seeds the gospel catalog with raw parameterized SQL. Produces the same
//! rows as the seed-tracks binary.

use std::process::ExitCode;

use log::{error, info};

use gifted_eternity::config::AppConfig;
use gifted_eternity::database::DatabaseService;
use gifted_eternity::seed;

fn main() -> ExitCode {
    env_logger::init();

    let config = AppConfig::from_env();
    if let Err(e) = std::fs::create_dir_all(&config.data_dir) {
        error!("Failed to create data directory {}: {e}", config.data_dir);
        return ExitCode::FAILURE;
    }

    // Pool setup runs the migrations so the raw statements have tables to
    // write into.
    let service = match DatabaseService::new(&config.database_url) {
        Ok(service) => service,
        Err(e) => {
            error!("Failed to open database {}: {e}", config.database_url);
            return ExitCode::FAILURE;
        }
    };

    let mut conn = match service.get_connection() {
        Ok(conn) => conn,
        Err(e) => {
            error!("Failed to get a database connection: {e}");
            return ExitCode::FAILURE;
        }
    };

    match seed::run_raw(&mut conn) {
        Ok(inserted) => {
            for title in &inserted {
                info!("Added: {title}");
            }
            info!("Successfully seeded {} tracks", inserted.len());
            ExitCode::SUCCESS
        }
        Err(failure) => {
            for title in &failure.inserted {
                info!("Added: {title}");
            }
            error!("{failure}");
            ExitCode::FAILURE
        }
    }
}
