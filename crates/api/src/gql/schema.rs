//! Query and mutation roots.

use async_graphql::{Context, EmptySubscription, Error, Object, Result, Schema};

use bookstore_core::error::CoreError;
use bookstore_core::types::DbId;
use bookstore_db::mapper;
use bookstore_db::models::{Author, Book, Category, CreateBook, UpdateBook};
use bookstore_db::repositories::{AuthorRepo, BookRepo, CategoryRepo};
use bookstore_db::DbPool;

pub type BookstoreSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the connection pool in its context data.
pub fn build_schema(pool: DbPool) -> BookstoreSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(pool)
        .finish()
}

fn gql_error(err: impl std::fmt::Display) -> Error {
    Error::new(err.to_string())
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All non-deleted books with their nested relations.
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        let pool = ctx.data::<DbPool>()?;
        let rows = BookRepo::list(pool).await.map_err(gql_error)?;
        mapper::books_from_rows(rows).map_err(gql_error)
    }

    /// A single non-deleted book, or null if absent or soft-deleted.
    async fn book(&self, ctx: &Context<'_>, id: DbId) -> Result<Option<Book>> {
        let pool = ctx.data::<DbPool>()?;
        let row = BookRepo::find_by_id(pool, id).await.map_err(gql_error)?;
        row.map(mapper::book_from_row)
            .transpose()
            .map_err(gql_error)
    }

    async fn authors(&self, ctx: &Context<'_>) -> Result<Vec<Author>> {
        let pool = ctx.data::<DbPool>()?;
        AuthorRepo::list(pool).await.map_err(gql_error)
    }

    async fn categories(&self, ctx: &Context<'_>) -> Result<Vec<Category>> {
        let pool = ctx.data::<DbPool>()?;
        CategoryRepo::list(pool).await.map_err(gql_error)
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a book together with its detail record (one transaction).
    async fn create_book(
        &self,
        ctx: &Context<'_>,
        title: String,
        category_id: DbId,
        author_id: DbId,
        price: f64,
        comment: Option<String>,
    ) -> Result<Book> {
        let pool = ctx.data::<DbPool>()?;
        let input = CreateBook {
            title,
            category_id,
            author_id,
            price,
            comment,
        };
        let row = BookRepo::create(pool, &input)
            .await
            .map_err(|e| gql_error(CoreError::Write(e.to_string())))?;
        mapper::book_from_row(row).map_err(gql_error)
    }

    /// Partially update a book; falsy values are skipped, per the REST
    /// surface's behaviour. Returns null if the id matches no book row.
    async fn update_book(
        &self,
        ctx: &Context<'_>,
        id: DbId,
        title: Option<String>,
        category_id: Option<DbId>,
        author_id: Option<DbId>,
        price: Option<f64>,
        comment: Option<String>,
    ) -> Result<Option<Book>> {
        let pool = ctx.data::<DbPool>()?;
        let input = UpdateBook {
            title,
            category_id,
            author_id,
            price,
            comment,
        };
        let row = BookRepo::update(pool, id, &input)
            .await
            .map_err(|e| gql_error(CoreError::Write(e.to_string())))?;
        row.map(mapper::book_from_row)
            .transpose()
            .map_err(gql_error)
    }

    /// Soft-delete a book. True iff a row was flagged.
    async fn delete_book(&self, ctx: &Context<'_>, id: DbId) -> Result<bool> {
        let pool = ctx.data::<DbPool>()?;
        BookRepo::soft_delete(pool, id).await.map_err(gql_error)
    }
}
