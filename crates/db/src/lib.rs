//! Store binding for the record service.
//!
//! Each collection is a PostgreSQL table. [`Database`] owns the pool and is
//! the only handle the HTTP layer holds on to.

pub mod models;
pub mod repositories;

use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use tokio::sync::OnceCell;

pub type DbPool = sqlx::PgPool;

const MAX_CONNECTIONS: u32 = 20;

fn pool_options() -> PgPoolOptions {
    PgPoolOptions::new().max_connections(MAX_CONNECTIONS)
}

/// Create a connection pool from a database URL, connecting immediately.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    pool_options().connect(database_url).await
}

/// Create a pool that opens connections on first use.
///
/// Only fails if `database_url` cannot be parsed.
pub fn create_lazy_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    pool_options().connect_lazy(database_url)
}

/// Run a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Connection manager handed to every request handler.
///
/// Wraps the pool and makes sure migrations have been applied before the
/// first query goes out. A failed startup connection is not fatal: the pool
/// keeps trying to connect on each acquire, and migrations are retried until
/// they succeed once.
pub struct Database {
    pool: DbPool,
    migrated: OnceCell<()>,
}

impl Database {
    /// Connect to the store at startup.
    ///
    /// Connection and migration failures are logged and swallowed; the
    /// returned handle falls back to lazy connections. Only an unparseable
    /// URL is an error.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = match create_pool(database_url).await {
            Ok(pool) => {
                tracing::info!("Database connection pool created");
                pool
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to connect to database");
                create_lazy_pool(database_url)?
            }
        };

        let db = Self::from_pool(pool);
        if let Err(e) = db.ready().await {
            tracing::error!(error = %e, "Database not ready, will retry on next request");
        }
        Ok(db)
    }

    /// Wrap an existing pool. Migrations still run on the first [`ready`](Self::ready).
    pub fn from_pool(pool: DbPool) -> Self {
        Self {
            pool,
            migrated: OnceCell::new(),
        }
    }

    /// The underlying pool, without the migration guarantee.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Return the pool once the schema is known to be in place.
    pub async fn ready(&self) -> Result<&DbPool, sqlx::Error> {
        self.migrated
            .get_or_try_init(|| async {
                run_migrations(&self.pool).await?;
                tracing::info!("Database migrations applied");
                Ok::<(), sqlx::Error>(())
            })
            .await?;
        Ok(&self.pool)
    }

    pub async fn is_healthy(&self) -> bool {
        health_check(&self.pool).await.is_ok()
    }

    /// Close all pooled connections. Used on shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
