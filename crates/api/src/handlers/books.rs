//! Handlers for the `/api/books` resource.
//!
//! The REST surface returns the flat joined rows straight from the
//! repository; only the GraphQL surface runs them through the mapper.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use bookstore_core::error::CoreError;
use bookstore_core::types::DbId;
use bookstore_db::models::book::{CreateBook, FlatBookRow, UpdateBook};
use bookstore_db::repositories::BookRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/books
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<FlatBookRow>>> {
    let rows = BookRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/books/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<FlatBookRow>> {
    let row = BookRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Book", id }))?;
    Ok(Json(row))
}

/// POST /api/books
///
/// Inserts the book and its detail record transactionally; a failure rolls
/// both back and surfaces as a 500.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<FlatBookRow>)> {
    let row = BookRepo::create(&state.pool, &input)
        .await
        .map_err(|e| AppError::Core(CoreError::Write(e.to_string())))?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/books/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBook>,
) -> AppResult<Json<FlatBookRow>> {
    let row = BookRepo::update(&state.pool, id, &input)
        .await
        .map_err(|e| AppError::Core(CoreError::Write(e.to_string())))?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Book", id }))?;
    Ok(Json(row))
}

/// DELETE /api/books/{id}
///
/// Logical delete: flags the book row, leaving `book_details` untouched.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let deleted = BookRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(json!({ "success": true })))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Book", id }))
    }
}
