//! Defines the endpoint for creating a new transaction.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    database_id::TransactionId,
    db::with_connection,
    transaction::{
        core::{TransactionState, create_transaction},
        form::{TransactionForm, parse_form},
    },
};

/// The response body for a newly created transaction.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct CreatedTransaction {
    /// The ID assigned to the new transaction.
    pub id: TransactionId,
}

/// A route handler for creating a new transaction, responds with the new ID.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    body: Result<Json<TransactionForm>, JsonRejection>,
) -> Result<Json<CreatedTransaction>, Error> {
    let form = parse_form(body)?;

    let id = with_connection(state.db_connection, move |connection| {
        create_transaction(&form, connection)
    })
    .await
    .inspect_err(|error| tracing::error!("could not create transaction: {error}"))?;

    tracing::debug!("Created transaction {id}");

    Ok(Json(CreatedTransaction { id }))
}
