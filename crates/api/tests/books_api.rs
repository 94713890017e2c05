//! HTTP-level integration tests for the REST surface.
//!
//! The REST API serves flat joined rows; these tests pin down the status
//! codes and payload shapes of every route in the table.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

use bookstore_db::models::author::CreateAuthor;
use bookstore_db::models::category::CreateCategory;
use bookstore_db::repositories::{AuthorRepo, CategoryRepo};

async fn seed_refs(pool: &PgPool) -> (i64, i64) {
    let category = CategoryRepo::create(
        pool,
        &CreateCategory {
            name: "SF".to_string(),
        },
    )
    .await
    .unwrap();
    let author = AuthorRepo::create(
        pool,
        &CreateAuthor {
            name: "Frank Herbert".to_string(),
            birthday: Some("1920-10-08".to_string()),
            address: None,
        },
    )
    .await
    .unwrap();
    (category.id, author.id)
}

async fn create_dune(pool: &PgPool) -> (i64, i64, i64) {
    let (category_id, author_id) = seed_refs(pool).await;
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/books",
        serde_json::json!({
            "title": "Dune",
            "categoryId": category_id,
            "authorId": author_id,
            "price": 1500.0,
            "comment": "classic",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    (json["id"].as_i64().unwrap(), category_id, author_id)
}

// ---------------------------------------------------------------------------
// Books
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_books_empty(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/books").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_book_returns_flat_row(pool: PgPool) {
    let (category_id, author_id) = seed_refs(&pool).await;
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/books",
        serde_json::json!({
            "title": "Dune",
            "categoryId": category_id,
            "authorId": author_id,
            "price": 1500.0,
            "comment": "classic",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["title"], "Dune");
    // Flat row: joined columns, no nesting.
    assert_eq!(json["category_name"], "SF");
    assert_eq!(json["author_name"], "Frank Herbert");
    assert_eq!(json["price"], 1500.0);
    assert_eq!(json["comment"], "classic");
    assert_eq!(json["del_flg"], false);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_get_book_by_id(pool: PgPool) {
    let (id, _, _) = create_dune(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/books/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"].as_i64(), Some(id));
    assert_eq!(json["title"], "Dune");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_get_nonexistent_book_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/books/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert!(json["error"].is_string());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_update_book_partial(pool: PgPool) {
    let (id, _, _) = create_dune(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/books/{id}"),
        serde_json::json!({ "price": 1800.0 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["price"], 1800.0);
    assert_eq!(json["title"], "Dune");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_update_with_zero_price_is_skipped(pool: PgPool) {
    let (id, _, _) = create_dune(&pool).await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/books/{id}"),
        serde_json::json!({ "price": 0 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Falsy values count as "not provided": the stored price is unchanged.
    let json = body_json(response).await;
    assert_eq!(json["price"], 1500.0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_update_nonexistent_book_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/books/999999",
        serde_json::json!({ "title": "Ghost" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_delete_book(pool: PgPool) {
    let (id, _, _) = create_dune(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/books/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({"success": true}));

    // Soft-deleted books are invisible to subsequent reads.
    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/books/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/books").await;
    let json = body_json(response).await;
    assert!(json.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_delete_nonexistent_book_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/books/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Categories and authors
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_categories(pool: PgPool) {
    seed_refs(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/categories").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "SF");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_authors_exposes_only_id_and_name(pool: PgPool) {
    seed_refs(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/authors").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Frank Herbert");
    let keys: Vec<_> = items[0].as_object().unwrap().keys().collect();
    assert_eq!(keys, ["id", "name"]);
}
