//! The income and expense summary across all transactions.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{AppState, Error, db::with_connection};

/// Totals of all income and expense transactions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The sum of the amounts of transactions with the type "income".
    pub total_income: f64,
    /// The sum of the amounts of transactions with the type "expense".
    pub total_expense: f64,
    /// Total income minus total expense.
    pub balance: f64,
}

/// The response body for the summary endpoint.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// The computed summary.
    pub summary: Summary,
}

/// The state needed to compute the summary.
#[derive(Debug, Clone)]
pub struct SummaryState {
    /// The database connection for reading transactions.
    db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for SummaryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler that responds with the total income, total expense and balance.
pub async fn get_summary_endpoint(
    State(state): State<SummaryState>,
) -> Result<Json<SummaryResponse>, Error> {
    let summary = with_connection(state.db_connection, compute_summary)
        .await
        .inspect_err(|error| tracing::error!("could not compute summary: {error}"))?;

    Ok(Json(SummaryResponse { summary }))
}

/// Sum the income and expense transactions.
///
/// Empty sums are zero. Transactions with any other type are ignored.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn compute_summary(connection: &Connection) -> Result<Summary, Error> {
    let (total_income, total_expense) = connection.query_row(
        "SELECT
            IFNULL(SUM(CASE WHEN type = :income THEN amount END), 0.0),
            IFNULL(SUM(CASE WHEN type = :expense THEN amount END), 0.0)
        FROM transactions",
        &[(":income", "income"), (":expense", "expense")],
        |row| Ok((row.get::<_, f64>(0)?, row.get::<_, f64>(1)?)),
    )?;

    Ok(Summary {
        total_income,
        total_expense,
        balance: total_income - total_expense,
    })
}
