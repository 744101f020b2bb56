//! Expense Tracker is a small REST API for recording personal income and
//! expenses.
//!
//! Transactions are stored in a single SQLite database and can be created,
//! listed, fetched, replaced and deleted over HTTP. A summary endpoint reports
//! the total income, total expense and the resulting balance.
//!
//! All request and response bodies are JSON.

#![warn(missing_docs)]

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

mod app_state;
mod category;
mod database_id;
mod db;
pub mod endpoints;
mod logging;
mod not_found;
mod routing;
mod summary;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use database_id::TransactionId;
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use summary::Summary;
pub use transaction::{Transaction, TransactionForm};

/// The message sent to clients when a transaction ID does not match any row.
pub const TRANSACTION_NOT_FOUND_MESSAGE: &str = "Transaction not found";

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested transaction was not found.
    ///
    /// Internally, this error occurs when a query returns no rows.
    #[error("the requested transaction could not be found")]
    NotFound,

    /// Tried to update a transaction that does not exist
    #[error("tried to update a transaction that is not in the database")]
    UpdateMissingTransaction,

    /// Tried to delete a transaction that does not exist
    #[error("tried to delete a transaction that is not in the database")]
    DeleteMissingTransaction,

    /// An unhandled/unexpected SQL error.
    ///
    /// The underlying message is passed to the client as is.
    #[error("{0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// The blocking task running a database operation panicked or was cancelled.
    #[error("the database task failed: {0}")]
    BackgroundTaskFailed(String),

    /// The request body could not be parsed as the expected JSON object.
    ///
    /// Holds the status code chosen by the extractor and its explanation.
    #[error("{1}")]
    InvalidRequestBody(StatusCode, String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

/// The JSON body sent with every error response.
#[derive(Debug, Serialize)]
pub(crate) struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Error::NotFound | Error::UpdateMissingTransaction | Error::DeleteMissingTransaction => {
                (
                    StatusCode::NOT_FOUND,
                    TRANSACTION_NOT_FOUND_MESSAGE.to_owned(),
                )
            }
            Error::InvalidRequestBody(status, message) => (status, message),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod error_tests {
    use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
    use serde_json::{Value, json};

    use crate::Error;

    async fn status_and_body(error: Error) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("could not read response body");

        (
            status,
            serde_json::from_slice(&bytes).expect("response body is not JSON"),
        )
    }

    #[tokio::test]
    async fn missing_transaction_errors_are_404() {
        for error in [
            Error::NotFound,
            Error::UpdateMissingTransaction,
            Error::DeleteMissingTransaction,
        ] {
            let (status, body) = status_and_body(error).await;

            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body, json!({ "error": "Transaction not found" }));
        }
    }

    #[tokio::test]
    async fn sql_error_exposes_raw_message() {
        let sql_error = rusqlite::Error::InvalidColumnName("foo".to_owned());
        let want_message = sql_error.to_string();

        let (status, body) = status_and_body(Error::from(sql_error)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": want_message }));
    }

    #[tokio::test]
    async fn invalid_body_keeps_extractor_status() {
        let (status, body) = status_and_body(Error::InvalidRequestBody(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "expected JSON".to_owned(),
        ))
        .await;

        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body, json!({ "error": "expected JSON" }));
    }

    #[test]
    fn no_rows_maps_to_not_found() {
        assert_eq!(
            Error::from(rusqlite::Error::QueryReturnedNoRows),
            Error::NotFound
        );
    }
}
