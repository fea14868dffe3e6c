use crate::{CollectionName, DbError, Result as DbErrorResult, SqliteCollection};

use acct_config::Config;
use acct_core::ErrorLocation;

use std::collections::HashMap;
use std::panic::Location;
use std::path::{Path, PathBuf};

use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tokio::sync::{OnceCell, RwLock};

/// Shared handle to the account database.
///
/// The pool is opened on first use and reused afterwards. Collections are
/// opened (table created) once per name and cached. Share one manager per
/// database, typically behind an `Arc`.
pub struct ConnectionManager {
    database_path: PathBuf,
    max_connections: u32,
    pool: OnceCell<SqlitePool>,
    collections: RwLock<HashMap<CollectionName, SqliteCollection>>,
}

impl ConnectionManager {
    pub fn new(database_path: impl Into<PathBuf>, max_connections: u32) -> Self {
        Self {
            database_path: database_path.into(),
            max_connections,
            pool: OnceCell::new(),
            collections: RwLock::new(HashMap::new()),
        }
    }

    #[track_caller]
    pub fn from_config(config: &Config) -> DbErrorResult<Self> {
        let database_path = config
            .database_path()
            .map_err(|e| DbError::Initialization {
                message: format!("Failed to resolve database path: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self::new(database_path, config.database.max_connections))
    }

    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    pub async fn pool(&self) -> DbErrorResult<SqlitePool> {
        self.pool
            .get_or_try_init(|| self.create_pool())
            .await
            .cloned()
    }

    pub async fn collection(&self, name: &CollectionName) -> DbErrorResult<SqliteCollection> {
        // Fast path: already opened
        {
            let collections = self.collections.read().await;
            if let Some(collection) = collections.get(name) {
                return Ok(collection.clone());
            }
        }

        let mut collections = self.collections.write().await;

        // Another task may have opened it while we waited for the write lock
        if let Some(collection) = collections.get(name) {
            return Ok(collection.clone());
        }

        let pool = self.pool().await?;
        let collection = SqliteCollection::open(pool, name.clone()).await?;
        collections.insert(name.clone(), collection.clone());

        Ok(collection)
    }

    async fn create_pool(&self) -> DbErrorResult<SqlitePool> {
        if let Some(parent) = self.database_path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DbError::Initialization {
                    message: format!("Failed to create database directory: {e}"),
                    location: ErrorLocation::from(Location::caller()),
                })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(&self.database_path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .connect_with(options)
            .await?;

        info!(
            "Opened database {} (max {} connections)",
            self.database_path.display(),
            self.max_connections
        );

        Ok(pool)
    }
}
