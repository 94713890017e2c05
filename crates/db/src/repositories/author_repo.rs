//! Repository for the `authors` table.

use sqlx::PgPool;

use crate::models::author::{Author, CreateAuthor};

const COLUMNS: &str = "id, name, birthday, address";

pub struct AuthorRepo;

impl AuthorRepo {
    /// List all authors, ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Author>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM authors ORDER BY id");
        sqlx::query_as::<_, Author>(&query).fetch_all(pool).await
    }

    /// Insert a new author, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAuthor) -> Result<Author, sqlx::Error> {
        let query = format!(
            "INSERT INTO authors (name, birthday, address) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Author>(&query)
            .bind(&input.name)
            .bind(&input.birthday)
            .bind(&input.address)
            .fetch_one(pool)
            .await
    }
}
