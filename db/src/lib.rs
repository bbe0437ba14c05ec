pub mod models;
pub mod test_utils;

use migration::Migrator;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::{info, warn};
use util::config::AppConfig;

/// Opens the store described by `config`.
///
/// For file-backed SQLite the parent directory is created first, since SQLite
/// won't create intermediate directories.
pub async fn connect(config: &AppConfig) -> Result<DatabaseConnection, DbErr> {
    if let Some(path) = config.sqlite_path() {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(err) = std::fs::create_dir_all(parent) {
                warn!(path = %parent.display(), error = %err, "could not create database directory");
            }
        }
    }

    let db = Database::connect(config.database_dsn()).await?;
    info!(backend = ?db.get_database_backend(), "database connected");
    Ok(db)
}

/// Applies any pending migrations on an open connection.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::up(db, None).await
}
