//! Bookstore API server library.
//!
//! Exposes the building blocks (config, state, error handling, REST routes,
//! GraphQL schema) so integration tests and the binary entrypoint can both
//! access them.

pub mod config;
pub mod error;
pub mod gql;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
