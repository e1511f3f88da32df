//! REST transport for the Bookstack catalog.
//!
//! Decodes HTTP requests into `bookstack-core` facade calls and encodes the
//! results (and the one typed failure, `BookNotFound`) back into responses.
//! Exposed as a library so integration tests can start the server
//! in-process; the `bookstack-rpc` binary is a thin wrapper.

pub mod error;
pub mod handlers;
pub mod server;
