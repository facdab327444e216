use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use log::{info, warn};
use std::path::Path;
use std::time::Duration;

use crate::error::DataError;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = diesel::r2d2::PooledConnection<ConnectionManager<SqliteConnection>>;

/// SQLite connection customizer to enable WAL mode and set pragmas for better concurrency
#[derive(Debug)]
pub struct SqliteConnectionCustomizer;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqliteConnectionCustomizer {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        use diesel::sql_query;

        // Set busy timeout first (before WAL mode) - this one is critical
        sql_query("PRAGMA busy_timeout = 60000") // 60 seconds
            .execute(conn)
            .map_err(diesel::r2d2::Error::QueryError)?;

        // Referential integrity is load-bearing for this schema; SQLite ships
        // with it off, so a connection that cannot enable it is unusable.
        sql_query("PRAGMA foreign_keys = ON")
            .execute(conn)
            .map_err(diesel::r2d2::Error::QueryError)?;

        // Enable WAL mode for better concurrency - critical for avoiding locks
        // Retry WAL mode setup since it's important for concurrency
        let mut wal_attempts = 0;
        let max_wal_attempts = 3;
        loop {
            match sql_query("PRAGMA journal_mode = WAL").execute(conn) {
                Ok(_) => break,
                Err(e) => {
                    wal_attempts += 1;
                    if wal_attempts >= max_wal_attempts {
                        warn!(
                            "Failed to enable WAL mode after {} attempts: {}",
                            max_wal_attempts, e
                        );
                        break;
                    }
                    // Short delay before retry
                    std::thread::sleep(Duration::from_millis(10));
                }
            }
        }

        // Optimize for concurrent access - use NORMAL instead of FULL for better performance
        if let Err(e) = sql_query("PRAGMA synchronous = NORMAL").execute(conn) {
            warn!("Failed to set synchronous mode: {}", e);
        }

        // Set cache size (negative value means KB) - performance optimization
        if let Err(e) = sql_query("PRAGMA cache_size = -32000").execute(conn) {
            warn!("Failed to set cache size: {}", e);
        }

        // Set WAL autocheckpoint for better performance - performance optimization
        if let Err(e) = sql_query("PRAGMA wal_autocheckpoint = 1000").execute(conn) {
            warn!("Failed to set WAL autocheckpoint: {}", e);
        }

        // Set temp store to memory for better performance - performance optimization
        if let Err(e) = sql_query("PRAGMA temp_store = MEMORY").execute(conn) {
            warn!("Failed to set temp store: {}", e);
        }

        Ok(())
    }
}

/// Creates a new database connection pool, applies pragmas and runs all
/// pending migrations.
pub fn create_pool(database_url: &str) -> Result<DbPool, DataError> {
    // Ensure the database directory exists
    if let Some(parent) = Path::new(database_url).parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| DataError::Connection(format!("failed to create data dir: {e}")))?;
    }

    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(20)
        .min_idle(Some(2))
        .connection_timeout(Duration::from_secs(60))
        .idle_timeout(Some(Duration::from_secs(300)))
        .max_lifetime(Some(Duration::from_secs(1800)))
        .connection_customizer(Box::new(SqliteConnectionCustomizer))
        .build(manager)
        .map_err(|e| DataError::Connection(e.to_string()))?;

    // Run migrations
    let mut conn = pool.get()?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| DataError::Migration(e.to_string()))?;

    info!("Database initialized successfully with WAL mode and foreign keys on");

    Ok(pool)
}

/// Gets a connection from the pool with retry logic and exponential backoff
pub fn get_connection_with_retry(pool: &DbPool) -> Result<DbConnection, DataError> {
    let mut attempts = 0;
    let max_attempts = 5;

    loop {
        match pool.get() {
            Ok(conn) => return Ok(conn),
            Err(e) => {
                attempts += 1;
                if attempts >= max_attempts {
                    return Err(DataError::Connection(format!(
                        "failed to get connection after {max_attempts} attempts: {e}"
                    )));
                }

                // Exponential backoff: 10ms, 20ms, 40ms, 80ms
                let delay = Duration::from_millis(10 * (1 << (attempts - 1)));
                std::thread::sleep(delay);
            }
        }
    }
}
