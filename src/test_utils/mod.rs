#![allow(missing_docs)]

pub(crate) mod http;

pub(crate) use http::{must_create_test_server, post_transaction};
