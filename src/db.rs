//! Database schema setup and the bridge between async handlers and the
//! blocking SQLite connection.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::{Error, category::create_category_table, transaction::create_transaction_table};

/// Create all the tables for the application's domain models.
///
/// Tables are only created if they do not already exist, so calling this on an
/// existing database is a no-op.
///
/// # Errors
/// Returns an [Error::SqlError] if any of the tables cannot be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_transaction_table(&transaction)?;
    create_category_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

/// Run `operation` against the shared connection on tokio's blocking thread pool.
///
/// Only the calling request waits on the database; other requests keep being
/// served while the query runs.
///
/// # Errors
/// Returns the error from `operation`, an [Error::DatabaseLockError] if the
/// connection lock is poisoned, or an [Error::BackgroundTaskFailed] if the
/// blocking task panics.
pub(crate) async fn with_connection<F, T>(
    db_connection: Arc<Mutex<Connection>>,
    operation: F,
) -> Result<T, Error>
where
    F: FnOnce(&Connection) -> Result<T, Error> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let connection = db_connection.lock().map_err(|error| {
            tracing::error!("could not acquire database lock: {error}");
            Error::DatabaseLockError
        })?;

        operation(&connection)
    })
    .await
    .map_err(|error| {
        tracing::error!("database task did not complete: {error}");
        Error::BackgroundTaskFailed(error.to_string())
    })?
}
