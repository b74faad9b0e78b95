//! Database pool initialization and storage errors

use directories::ProjectDirs;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

pub type DbPool = SqlitePool;

/// Errors surfaced by the persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("database error: {0}")]
  Database(#[from] sqlx::Error),

  #[error("migration error: {0}")]
  Migration(#[from] sqlx::migrate::MigrateError),

  #[error("could not determine application data directory")]
  DataDir,

  #[error("corrupt stored data: {0}")]
  Corrupt(String),
}

/// Path to the database file under the platform application-data directory.
fn db_path() -> Result<PathBuf, StoreError> {
  let dirs = ProjectDirs::from("com", "lift-log", "lift-log").ok_or(StoreError::DataDir)?;
  let data_dir = dirs.data_dir();

  fs::create_dir_all(data_dir).map_err(|_| StoreError::DataDir)?;

  Ok(data_dir.join("lift-log.db"))
}

/// Initialize the database connection pool and run migrations.
pub async fn initialize_db() -> Result<DbPool, StoreError> {
  let path = db_path()?;
  let db_url = format!("sqlite://{}?mode=rwc", path.display());

  tracing::info!(path = %path.display(), "initializing database");

  let pool = SqlitePoolOptions::new()
    .max_connections(5)
    .connect(&db_url)
    .await?;

  sqlx::migrate!("./migrations").run(&pool).await?;

  tracing::info!("database initialized");

  Ok(pool)
}
