//! The request body for creating and replacing transactions, plus helpers for
//! turning extractor rejections into [Error]s.

use axum::{
    Json,
    extract::{
        Path,
        rejection::{JsonRejection, PathRejection},
    },
};
use serde::{Deserialize, Serialize};

use crate::{Error, database_id::TransactionId};

/// The JSON body for creating or replacing a transaction.
///
/// Every field is optional so that a missing field reaches the database as
/// `NULL` and is accepted or rejected by the table constraints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionForm {
    /// Either "income" or "expense".
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// The category of the transaction.
    pub category: Option<String>,
    /// The value of the transaction.
    pub amount: Option<f64>,
    /// The date when the transaction ocurred.
    pub date: Option<String>,
    /// Text detailing the transaction.
    pub description: Option<String>,
}

impl TransactionForm {
    /// Create a form with all the required fields set and no description.
    pub fn new(kind: &str, category: &str, amount: f64, date: &str) -> Self {
        Self {
            kind: Some(kind.to_owned()),
            category: Some(category.to_owned()),
            amount: Some(amount),
            date: Some(date.to_owned()),
            description: None,
        }
    }

    /// Set the description for the transaction.
    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }
}

/// Unwrap a JSON body, keeping the rejection's status code on failure.
pub(crate) fn parse_form(
    body: Result<Json<TransactionForm>, JsonRejection>,
) -> Result<TransactionForm, Error> {
    match body {
        Ok(Json(form)) => Ok(form),
        Err(rejection) => {
            tracing::warn!("Rejected transaction body: {}", rejection.body_text());
            Err(Error::InvalidRequestBody(
                rejection.status(),
                rejection.body_text(),
            ))
        }
    }
}

/// Unwrap a transaction ID path parameter.
///
/// A parameter that is not an integer cannot match any row, so it is reported
/// as [Error::NotFound].
pub(crate) fn parse_transaction_id(
    path: Result<Path<TransactionId>, PathRejection>,
) -> Result<TransactionId, Error> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            tracing::debug!("Invalid transaction ID: {}", rejection.body_text());
            Err(Error::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::transaction::TransactionForm;

    #[test]
    fn deserializes_type_field() {
        let form: TransactionForm = serde_json::from_value(json!({
            "type": "income",
            "category": "salary",
            "amount": 1000,
            "date": "2024-10-22",
            "description": "Monthly Salary"
        }))
        .unwrap();

        assert_eq!(
            form,
            TransactionForm::new("income", "salary", 1000.0, "2024-10-22")
                .description("Monthly Salary")
        );
    }

    #[test]
    fn missing_fields_are_none() {
        let form: TransactionForm = serde_json::from_value(json!({ "category": "salary" })).unwrap();

        assert_eq!(
            form,
            TransactionForm {
                category: Some("salary".to_owned()),
                ..Default::default()
            }
        );
    }
}
