//! This module acts as a central hub for all database-related logic.
//! `Store` owns the SQLite pool; the feature submodules add their queries to it
//! as `impl Store` blocks, e.g. `store.activity_totals(..)` lives in `fitness`.

pub mod fitness;
mod init;
pub mod models;
pub mod playlists;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::error::StoreError;

/// A type alias for the database connection pool.
pub type DbPool = SqlitePool;

const MAX_CONNECTIONS: u32 = 5;

/// Handle to the persistent store. Cloning is cheap and shares the pool.
#[derive(Clone, Debug)]
pub struct Store {
    pool: DbPool,
}

impl Store {
    /// Connects to `url` and creates the schema if it does not exist yet.
    pub async fn open(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let in_memory = url.contains(":memory:");
        // Every connection to an in-memory database sees its own empty database.
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(MAX_CONNECTIONS)
        };
        let pool = pool_options.connect_with(options).await?;
        init::create_schema(&pool).await?;
        info!(target = "db", url, "store opened");
        Ok(Self { pool })
    }

    pub async fn open_in_memory() -> Result<Self, StoreError> {
        Self::open("sqlite::memory:").await
    }

    /// Waits for in-flight queries and closes every connection.
    pub async fn close(&self) {
        self.pool.close().await;
        info!(target = "db", "store closed");
    }

    /// Every query in this module runs through here. Public so tests can inspect
    /// rows directly.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}
