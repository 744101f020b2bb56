//! Defines the endpoint for replacing a transaction.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};

use crate::{
    Error,
    database_id::TransactionId,
    db::with_connection,
    transaction::{
        MessageResponse,
        core::{TransactionState, update_transaction},
        form::{TransactionForm, parse_form, parse_transaction_id},
    },
};

/// The message sent after a transaction has been replaced.
pub const UPDATED_MESSAGE: &str = "Transaction updated successfully";

/// A route handler that replaces all fields of a transaction.
///
/// Fields left out of the body are written as `NULL`, there is no partial update.
pub async fn edit_transaction_endpoint(
    State(state): State<TransactionState>,
    path: Result<Path<TransactionId>, PathRejection>,
    body: Result<Json<TransactionForm>, JsonRejection>,
) -> Result<Json<MessageResponse>, Error> {
    let transaction_id = parse_transaction_id(path)?;
    let form = parse_form(body)?;

    let rows_affected = with_connection(state.db_connection, move |connection| {
        update_transaction(transaction_id, &form, connection)
    })
    .await
    .inspect_err(|error| {
        tracing::error!("Could not update transaction {transaction_id}: {error}")
    })?;

    if rows_affected == 0 {
        tracing::debug!("Could not update transaction {transaction_id}: no such transaction");
        return Err(Error::UpdateMissingTransaction);
    }

    Ok(Json(MessageResponse::new(UPDATED_MESSAGE)))
}
