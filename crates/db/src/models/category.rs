//! Category entity model.

use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use bookstore_core::types::DbId;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize, SimpleObject)]
pub struct Category {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
}
