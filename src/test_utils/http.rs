use axum_test::TestServer;
use rusqlite::Connection;

use crate::{
    AppState, build_router, database_id::TransactionId, endpoints, transaction::TransactionForm,
};

/// Create a test server backed by a fresh in-memory database.
#[track_caller]
pub(crate) fn must_create_test_server() -> TestServer {
    let connection = Connection::open_in_memory().expect("Could not open database in memory.");
    let state = AppState::new(connection).expect("Could not initialize database.");

    TestServer::try_new(build_router(state)).expect("Could not create test server.")
}

/// Create a transaction through the API and return its ID.
pub(crate) async fn post_transaction(server: &TestServer, form: &TransactionForm) -> TransactionId {
    let response = server.post(endpoints::TRANSACTIONS).json(form).await;
    response.assert_status_ok();

    response.json::<serde_json::Value>()["id"]
        .as_i64()
        .expect("create response should contain a numeric id")
}
