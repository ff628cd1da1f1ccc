pub mod clients;
pub mod ledger;
pub mod profiles;
pub mod projects;
pub mod teams;
pub mod transactions;

use std::sync::Arc;
use std::time::Duration;

use futures_util::FutureExt;
use futures_util::future::{BoxFuture, Shared};
use sqlx::PgPool;
use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use tokio::sync::{Mutex, OnceCell};

use crate::config::Config;

/// Failure to obtain data from the database, as seen by route handlers.
///
/// Cheap to clone so one failed connection attempt can be handed to every
/// caller that was waiting on it.
#[derive(Debug, Clone)]
pub enum DataSourceError {
    /// No connection string is configured.
    Unconfigured,
    /// The database could not be reached.
    Unavailable(Arc<sqlx::Error>),
    Migration(Arc<MigrateError>),
    Query(Arc<sqlx::Error>),
}

impl DataSourceError {
    /// True when the failure is about reaching the database at all, as opposed
    /// to the database rejecting a particular statement.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            DataSourceError::Unconfigured | DataSourceError::Unavailable(_)
        )
    }

    pub fn is_unique_violation(&self) -> bool {
        match self {
            DataSourceError::Query(err) => {
                matches!(err.as_ref(), sqlx::Error::Database(db_err) if db_err.is_unique_violation())
            }
            _ => false,
        }
    }
}

impl std::fmt::Display for DataSourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSourceError::Unconfigured => write!(f, "DATABASE_URL is not configured"),
            DataSourceError::Unavailable(err) => write!(f, "Database unavailable: {err}"),
            DataSourceError::Migration(err) => write!(f, "Migration failed: {err}"),
            DataSourceError::Query(err) => write!(f, "Query failed: {err}"),
        }
    }
}

impl std::error::Error for DataSourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataSourceError::Unconfigured => None,
            DataSourceError::Unavailable(err) | DataSourceError::Query(err) => Some(err.as_ref()),
            DataSourceError::Migration(err) => Some(err.as_ref()),
        }
    }
}

impl From<sqlx::Error> for DataSourceError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => DataSourceError::Unavailable(Arc::new(err)),
            _ => DataSourceError::Query(Arc::new(err)),
        }
    }
}

type ConnectAttempt = Shared<BoxFuture<'static, Result<PgPool, DataSourceError>>>;

/// Lazily connected database handle.
///
/// The pool is created on the first successful [`Database::connect`] and reused
/// afterwards. Callers arriving while an attempt is in flight await that same
/// attempt and all receive its outcome. A failed attempt leaves nothing cached,
/// so the next call tries again.
pub struct Database {
    url: Option<String>,
    max_connections: u32,
    acquire_timeout: Duration,
    pool: OnceCell<PgPool>,
    attempt: Mutex<Option<ConnectAttempt>>,
}

impl Database {
    pub fn new(config: &Config) -> Self {
        Self {
            url: config.database_url.clone(),
            max_connections: config.db_max_connections,
            acquire_timeout: config.db_acquire_timeout,
            pool: OnceCell::new(),
            attempt: Mutex::new(None),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some() || self.pool.initialized()
    }

    /// Establish the connection, or reuse the one already established.
    pub async fn connect(&self) -> Result<&PgPool, DataSourceError> {
        if let Some(pool) = self.pool.get() {
            return Ok(pool);
        }
        let url = self.url.as_deref().ok_or(DataSourceError::Unconfigured)?;

        let attempt = {
            let mut slot = self.attempt.lock().await;
            if let Some(pool) = self.pool.get() {
                return Ok(pool);
            }
            slot.get_or_insert_with(|| {
                open(url.to_string(), self.max_connections, self.acquire_timeout)
                    .boxed()
                    .shared()
            })
            .clone()
        };

        let result = attempt.clone().await;
        if let Ok(pool) = &result {
            // Publish the pool before retiring the attempt so no caller
            // starts a second one in between.
            let _ = self.pool.set(pool.clone());
        }

        {
            let mut slot = self.attempt.lock().await;
            if slot.as_ref().is_some_and(|current| current.ptr_eq(&attempt)) {
                *slot = None;
            }
        }

        let pool = result?;
        Ok(self.pool.get_or_init(|| async move { pool }).await)
    }

    pub async fn close(&self) {
        if let Some(pool) = self.pool.get() {
            pool.close().await;
        }
    }
}

async fn open(
    url: String,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<PgPool, DataSourceError> {
    tracing::info!("Connecting to database");
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect(&url)
        .await?;

    let pool = migrate_or_close(pool).await?;
    tracing::info!("Database connected, migrations applied");
    Ok(pool)
}

/// Apply the embedded migrations. A pool whose migrations fail is closed
/// rather than left for the next attempt to leak alongside.
async fn migrate_or_close(pool: PgPool) -> Result<PgPool, DataSourceError> {
    match sqlx::migrate!("./migrations").run(&pool).await {
        Ok(()) => Ok(pool),
        Err(err) => {
            pool.close().await;
            Err(DataSourceError::Migration(Arc::new(err)))
        }
    }
}
