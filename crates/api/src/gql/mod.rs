//! GraphQL surface over the same repository the REST routes use.
//!
//! The schema returns the mapper's nested objects, while REST serves the
//! flat rows; both derive from one repository call.

mod schema;

pub use schema::{build_schema, BookstoreSchema, MutationRoot, QueryRoot};
