use std::sync::Arc;

use crate::config::ServerConfig;
use crate::gql::BookstoreSchema;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: bookstore_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// GraphQL schema, built once at startup with the pool in its context.
    pub schema: BookstoreSchema,
}
