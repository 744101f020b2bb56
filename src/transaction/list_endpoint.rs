//! Defines the endpoint for listing every transaction.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    db::with_connection,
    transaction::{
        Transaction,
        core::{TransactionState, list_transactions},
    },
};

/// The response body listing all transactions.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionList {
    /// Every stored transaction, possibly empty.
    pub transactions: Vec<Transaction>,
}

/// A route handler that responds with all transactions.
pub async fn list_transactions_endpoint(
    State(state): State<TransactionState>,
) -> Result<Json<TransactionList>, Error> {
    let transactions = with_connection(state.db_connection, list_transactions)
        .await
        .inspect_err(|error| tracing::error!("could not list transactions: {error}"))?;

    Ok(Json(TransactionList { transactions }))
}
