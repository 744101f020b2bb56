use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::{
    Error,
    database_id::TransactionId,
    db::with_connection,
    transaction::{
        MessageResponse,
        core::{TransactionState, delete_transaction},
        form::parse_transaction_id,
    },
};

/// The message sent after a transaction has been deleted.
pub const DELETED_MESSAGE: &str = "Transaction deleted successfully";

/// A route handler for deleting a transaction.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    path: Result<Path<TransactionId>, PathRejection>,
) -> Result<Json<MessageResponse>, Error> {
    let transaction_id = parse_transaction_id(path)?;

    let rows_affected = with_connection(state.db_connection, move |connection| {
        delete_transaction(transaction_id, connection)
    })
    .await
    .inspect_err(|error| {
        tracing::error!("Could not delete transaction {transaction_id}: {error}")
    })?;

    match rows_affected {
        0 => Err(Error::DeleteMissingTransaction),
        _ => Ok(Json(MessageResponse::new(DELETED_MESSAGE))),
    }
}
