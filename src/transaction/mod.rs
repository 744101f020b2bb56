//! Transaction management for the expense tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the `TransactionForm` request body
//! - Database functions for storing, querying, and managing transactions
//! - One route handler per transaction endpoint

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod form;
mod get_endpoint;
mod list_endpoint;

use serde::{Deserialize, Serialize};

pub use self::core::{Transaction, create_transaction_table};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use form::TransactionForm;
pub use get_endpoint::get_transaction_endpoint;
pub use list_endpoint::list_transactions_endpoint;

#[cfg(test)]
pub(crate) use create_endpoint::CreatedTransaction;
#[cfg(test)]
pub(crate) use delete_endpoint::DELETED_MESSAGE;
#[cfg(test)]
pub(crate) use edit_endpoint::UPDATED_MESSAGE;
#[cfg(test)]
pub(crate) use get_endpoint::SingleTransaction;
#[cfg(test)]
pub(crate) use list_endpoint::TransactionList;

/// A response body carrying a human readable confirmation.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// The confirmation text.
    pub message: String,
}

impl MessageResponse {
    /// Create a response with the given `message`.
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}
