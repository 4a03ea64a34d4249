use std::{fmt, path::Path, str::FromStr, time::Duration};

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use tracing::{debug, info};

use crate::{
    database::seed::{self, SeedOutcome},
    error::{Result, SalesError},
};

/// Statistics about the connection pool
#[derive(Debug, Clone)]
pub struct PoolStats {
    pub size: u32,
    pub idle: u32,
    pub max_size: u32,
}

#[derive(Clone)]
pub struct SqliteDatabase {
    pool: SqlitePool,
    max_connections: u32,
}

impl fmt::Debug for SqliteDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteDatabase")
            .field("pool_size", &self.pool.size())
            .field("idle_connections", &self.pool.num_idle())
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl SqliteDatabase {
    /// Opens a pool for `url`, creating the database file (and its parent
    /// directory) when missing.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let connect_options = Self::build_connect_options(url)?;
        let in_memory = is_in_memory(url);

        if !in_memory {
            ensure_parent_dir(connect_options.get_filename())?;
        }

        // Every in-memory connection is its own database, so pin the pool to
        // a single connection that never expires.
        let (max_connections, pool_options) = if in_memory {
            (
                1,
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None),
            )
        } else {
            (
                max_connections.max(1),
                SqlitePoolOptions::new()
                    .max_connections(max_connections.max(1))
                    .idle_timeout(Duration::from_secs(600)),
            )
        };

        let pool = pool_options
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(connect_options)
            .await
            .map_err(|e| {
                SalesError::Internal(format!("Database connection failed: {}", e))
            })?;

        info!(
            max_connections,
            in_memory, "Database pool initialized"
        );

        Ok(Self {
            pool,
            max_connections,
        })
    }

    /// Fresh private in-memory database with the schema applied.
    pub async fn in_memory() -> Result<Self> {
        let db = Self::connect("sqlite::memory:", 1).await?;
        db.initialize_schema().await?;
        Ok(db)
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        let max_connections = pool.options().get_max_connections();
        Self {
            pool,
            max_connections,
        }
    }

    fn build_connect_options(url: &str) -> Result<SqliteConnectOptions> {
        let options = SqliteConnectOptions::from_str(url).map_err(|e| {
            SalesError::Internal(format!("Invalid database URL '{}': {}", url, e))
        })?;
        Ok(options.create_if_missing(true).foreign_keys(true))
    }

    /// Applies pending migrations.
    pub async fn initialize_schema(&self) -> Result<()> {
        crate::MIGRATOR.run(&self.pool).await?;
        debug!("Database schema is up to date");
        Ok(())
    }

    pub async fn seed_sample_data(&self) -> Result<SeedOutcome> {
        seed::seed_sample_data(&self.pool).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub fn pool_stats(&self) -> PoolStats {
        PoolStats {
            size: self.pool.size(),
            idle: self.pool.num_idle() as u32,
            max_size: self.max_connections,
        }
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
        info!(directory = %parent.display(), "Created database directory");
    }
    Ok(())
}
