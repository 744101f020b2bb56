//! Defines the endpoint for fetching a single transaction.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    database_id::TransactionId,
    db::with_connection,
    transaction::{
        Transaction,
        core::{TransactionState, get_transaction},
        form::parse_transaction_id,
    },
};

/// The response body for a single transaction.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct SingleTransaction {
    /// The requested transaction.
    pub transaction: Transaction,
}

/// A route handler that responds with the transaction matching the path ID.
pub async fn get_transaction_endpoint(
    State(state): State<TransactionState>,
    path: Result<Path<TransactionId>, PathRejection>,
) -> Result<Json<SingleTransaction>, Error> {
    let transaction_id = parse_transaction_id(path)?;

    let transaction = with_connection(state.db_connection, move |connection| {
        get_transaction(transaction_id, connection)
    })
    .await?;

    Ok(Json(SingleTransaction { transaction }))
}
