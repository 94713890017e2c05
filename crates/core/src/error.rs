use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// Repositories return `sqlx::Error` directly; these variants classify
/// failures at the boundary where they are surfaced to a caller.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No matching, non-deleted row for the given id.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A joined row had a shape the mapper cannot nest.
    #[error("Mapping failed: {0}")]
    Mapping(String),

    /// A transactional write failed; the transaction was rolled back.
    #[error("Write failed: {0}")]
    Write(String),

    /// The connection pool is saturated and acquisition timed out.
    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

    /// Anything else.
    #[error("Internal error: {0}")]
    Internal(String),
}
