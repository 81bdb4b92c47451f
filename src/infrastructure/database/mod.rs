//! Database setup for SeaORM over embedded SQLite.

pub mod entities;
pub mod migrator;
pub mod repositories;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

/// Database connection configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection URL, e.g. `sqlite://students.db?mode=rwc`
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://students.db?mode=rwc".to_string(),
        }
    }
}

/// Open the database connection.
///
/// Table provisioning is a separate step — run the migrator before
/// serving requests.
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(&config.url);
    options.sqlx_logging(false);

    let db = Database::connect(options).await?;
    info!("Database connection established: {}", config.url);
    Ok(db)
}
