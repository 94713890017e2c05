//! Repository for the `books` table and its one-to-one `book_details`.

use sqlx::{PgExecutor, PgPool};

use bookstore_core::types::DbId;

use crate::models::{CreateBook, FlatBookRow, UpdateBook};

/// Joined column list shared across every read query. The related-table ids
/// are selected (not the raw foreign keys) so a dangling reference shows up
/// as a null `category_id` / `author_id` in the projection.
const COLUMNS: &str = "b.id, b.title, b.reg_date, b.del_flg, \
    c.id AS category_id, c.name AS category_name, \
    a.id AS author_id, a.name AS author_name, a.birthday, a.address, \
    bd.id AS detail_id, bd.price, bd.comment";

const JOINS: &str = "FROM books b \
    LEFT JOIN categories c ON b.category_id = c.id \
    LEFT JOIN authors a ON b.author_id = a.id \
    LEFT JOIN book_details bd ON b.id = bd.book_id";

/// Provides CRUD operations for books.
pub struct BookRepo;

impl BookRepo {
    /// List all non-deleted books with their joined relations.
    ///
    /// LEFT JOINs throughout: absence of a related row never excludes the
    /// book. Ordered by id for a stable result.
    pub async fn list(pool: &PgPool) -> Result<Vec<FlatBookRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {JOINS} WHERE b.del_flg = false ORDER BY b.id");
        sqlx::query_as::<_, FlatBookRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a non-deleted book by id with its joined relations.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<FlatBookRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {JOINS} WHERE b.id = $1 AND b.del_flg = false");
        sqlx::query_as::<_, FlatBookRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a book by id regardless of its delete flag.
    ///
    /// The write paths re-read through this: a freshly created book is never
    /// deleted, and an update targets the row by id alone.
    pub async fn find_by_id_include_deleted<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<FlatBookRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {JOINS} WHERE b.id = $1");
        sqlx::query_as::<_, FlatBookRow>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Insert a book and its detail record as one transaction.
    ///
    /// The store assigns `id` and `reg_date`. Both inserts commit together;
    /// any failure rolls the whole transaction back and propagates.
    pub async fn create(pool: &PgPool, input: &CreateBook) -> Result<FlatBookRow, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let book_id: DbId = sqlx::query_scalar(
            "INSERT INTO books (title, category_id, author_id) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&input.title)
        .bind(input.category_id)
        .bind(input.author_id)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO book_details (book_id, price, comment) VALUES ($1, $2, $3)")
            .bind(book_id)
            .bind(input.price)
            .bind(&input.comment)
            .execute(&mut *tx)
            .await?;

        let row = Self::find_by_id_include_deleted(&mut *tx, book_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;

        tx.commit().await?;
        tracing::debug!(book_id, "created book");
        Ok(row)
    }

    /// Partially update a book and/or its detail record in one transaction.
    ///
    /// Falsy field values (empty string, zero) count as "not provided" and
    /// are skipped; this mirrors what existing clients expect, so a price of
    /// `0` deliberately leaves the stored price unchanged. Book-table fields
    /// and detail-table fields are two independent statements; a group with
    /// no surviving field executes no statement at all.
    ///
    /// Returns `None` if no book row with the given id exists (deleted or
    /// not -- the row is looked up by id alone).
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBook,
    ) -> Result<Option<FlatBookRow>, sqlx::Error> {
        let title = input.title.as_deref().filter(|t| !t.is_empty());
        let category_id = input.category_id.filter(|&v| v != 0);
        let author_id = input.author_id.filter(|&v| v != 0);
        let price = input.price.filter(|&p| p != 0.0);
        let comment = input.comment.as_deref().filter(|c| !c.is_empty());

        let mut tx = pool.begin().await?;

        if title.is_some() || category_id.is_some() || author_id.is_some() {
            sqlx::query(
                "UPDATE books SET \
                    title = COALESCE($2, title), \
                    category_id = COALESCE($3, category_id), \
                    author_id = COALESCE($4, author_id) \
                 WHERE id = $1",
            )
            .bind(id)
            .bind(title)
            .bind(category_id)
            .bind(author_id)
            .execute(&mut *tx)
            .await?;
        }

        if price.is_some() || comment.is_some() {
            sqlx::query(
                "UPDATE book_details SET \
                    price = COALESCE($2, price), \
                    comment = COALESCE($3, comment) \
                 WHERE book_id = $1",
            )
            .bind(id)
            .bind(price)
            .bind(comment)
            .execute(&mut *tx)
            .await?;
        }

        let row = Self::find_by_id_include_deleted(&mut *tx, id).await?;
        tx.commit().await?;
        Ok(row)
    }

    /// Soft-delete a book by flagging it; `book_details` is untouched.
    ///
    /// Returns `true` iff a row matched. The flag is set unconditionally,
    /// so flagging an already-deleted book still matches.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE books SET del_flg = true WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
