//! Book entity models and DTOs.
//!
//! Two read shapes exist on purpose. [`FlatBookRow`] is the single joined
//! projection every read query produces; the REST surface serializes it
//! as-is, while the GraphQL surface runs it through [`crate::mapper`] to
//! get the nested [`Book`].

use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use bookstore_core::types::{DbId, Timestamp};

use crate::models::{Author, Category};

/// One flattened row from the three-way LEFT JOIN over `books`,
/// `categories`, `authors` and `book_details`.
///
/// `category_id`, `author_id` and `detail_id` are the *joined* table ids,
/// so each is null when the join found no row -- including when the book
/// carries a dangling reference. `id` is only optional so the mapper can
/// reject a projection that lost the book id; rows read from the database
/// always have it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FlatBookRow {
    pub id: Option<DbId>,
    pub title: String,
    pub reg_date: Timestamp,
    pub del_flg: bool,
    pub category_id: Option<DbId>,
    pub category_name: Option<String>,
    pub author_id: Option<DbId>,
    pub author_name: Option<String>,
    pub birthday: Option<String>,
    pub address: Option<String>,
    pub detail_id: Option<DbId>,
    pub price: Option<f64>,
    pub comment: Option<String>,
}

/// A book with its related records nested.
#[derive(Debug, Clone, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: DbId,
    pub title: String,
    pub reg_date: Timestamp,
    pub del_flg: bool,
    pub category: Option<Category>,
    pub author: Option<Author>,
    pub details: Option<BookDetail>,
}

/// The one-to-one detail record of a book.
#[derive(Debug, Clone, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct BookDetail {
    pub id: DbId,
    pub price: f64,
    pub comment: Option<String>,
}

/// DTO for creating a book together with its detail record.
///
/// `category_id`/`author_id` are not checked against the referenced tables;
/// a dangling reference is accepted and shows up as a null `category` /
/// `author` on subsequent reads.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    pub title: String,
    pub category_id: DbId,
    pub author_id: DbId,
    pub price: f64,
    pub comment: Option<String>,
}

/// DTO for partially updating a book and its detail record.
///
/// Falsy values (empty string, zero) are treated as "not provided" by the
/// repository, matching the behaviour the clients of this API rely on.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub category_id: Option<DbId>,
    pub author_id: Option<DbId>,
    pub price: Option<f64>,
    pub comment: Option<String>,
}
