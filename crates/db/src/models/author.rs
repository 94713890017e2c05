//! Author entity model.

use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use bookstore_core::types::DbId;

/// A row from the `authors` table.
#[derive(Debug, Clone, FromRow, Serialize, SimpleObject)]
pub struct Author {
    pub id: DbId,
    pub name: String,
    pub birthday: Option<String>,
    pub address: Option<String>,
}

/// DTO for creating a new author.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAuthor {
    pub name: String,
    pub birthday: Option<String>,
    pub address: Option<String>,
}
