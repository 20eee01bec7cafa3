//! Store bootstrap: fixed-delay reconnect loop run once at process start.
//!
//! The service refuses to serve traffic until the store answers, so the
//! HTTP listener is only bound after this loop completes. Retries are
//! unbounded with a fixed delay and no backoff; each failure is logged as
//! a warning and nothing is surfaced to clients.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use diesel::Connection;
use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_async::AsyncPgConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::warn;

use super::pool::{DbPool, PoolConfig, PoolError};

/// Delay between connection attempts.
pub const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Schema migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run `attempt` until it succeeds, sleeping for `delay` between failures.
///
/// There is no attempt cap: a permanently unreachable store keeps the
/// process in this loop forever.
pub async fn retry_until_connected<F, Fut, T, E>(delay: Duration, mut attempt: F) -> T
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    loop {
        match attempt().await {
            Ok(value) => return value,
            Err(error) => {
                warn!(
                    %error,
                    delay_secs = delay.as_secs(),
                    "store connection failed, retrying"
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
}

/// Connect to the store, retrying forever with [`RETRY_DELAY`].
///
/// A successful attempt builds the pool, checks out a probe connection,
/// and applies pending migrations, so the returned pool is ready to serve
/// queries.
pub async fn connect_with_retry(database_url: &str, delay: Duration) -> DbPool {
    let url = database_url.to_owned();
    retry_until_connected(delay, move || {
        let url = url.clone();
        async move { try_connect(&url).await }
    })
    .await
}

async fn try_connect(database_url: &str) -> Result<DbPool, PoolError> {
    let pool = DbPool::new(PoolConfig::new(database_url)).await?;
    // Probe: pool construction is lazy, so force one real checkout.
    drop(pool.get().await?);
    run_migrations(database_url).await?;
    Ok(pool)
}

/// Apply pending migrations over a dedicated blocking connection.
async fn run_migrations(database_url: &str) -> Result<(), PoolError> {
    let url = database_url.to_owned();
    tokio::task::spawn_blocking(move || {
        let mut conn = AsyncConnectionWrapper::<AsyncPgConnection>::establish(&url)
            .map_err(|err| PoolError::migration(err.to_string()))?;
        conn.run_pending_migrations(MIGRATIONS)
            .map(|_| ())
            .map_err(|err| PoolError::migration(err.to_string()))
    })
    .await
    .map_err(|err| PoolError::migration(err.to_string()))?
}
