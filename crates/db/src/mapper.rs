//! Converts flat joined rows into nested domain objects.
//!
//! Pure transformations, no database access. Absence of a row (`None` at
//! the call site) is the caller's not-found case; these functions only deal
//! with rows that exist.

use bookstore_core::error::CoreError;

use crate::models::{Author, Book, BookDetail, Category, FlatBookRow};

/// Nest a single joined row into a [`Book`].
///
/// Each related object is present iff its joined id column is non-null, so
/// a dangling `books.category_id` yields `category: None` rather than an
/// error. Fails only when the row lost its mandatory book id.
pub fn book_from_row(row: FlatBookRow) -> Result<Book, CoreError> {
    let id = row
        .id
        .ok_or_else(|| CoreError::Mapping("joined row is missing the book id".into()))?;

    let category = row.category_id.map(|category_id| Category {
        id: category_id,
        // name is NOT NULL in the schema; empty only for a malformed projection.
        name: row.category_name.clone().unwrap_or_default(),
    });

    let author = row.author_id.map(|author_id| Author {
        id: author_id,
        name: row.author_name.clone().unwrap_or_default(),
        birthday: row.birthday.clone(),
        address: row.address.clone(),
    });

    let details = row.detail_id.map(|detail_id| BookDetail {
        id: detail_id,
        price: row.price.unwrap_or_default(),
        comment: row.comment.clone(),
    });

    Ok(Book {
        id,
        title: row.title,
        reg_date: row.reg_date,
        del_flg: row.del_flg,
        category,
        author,
        details,
    })
}

/// Nest rows element-wise, preserving row order.
pub fn books_from_rows(rows: Vec<FlatBookRow>) -> Result<Vec<Book>, CoreError> {
    rows.into_iter().map(book_from_row).collect()
}
