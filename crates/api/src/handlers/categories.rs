//! Handlers for the `/api/categories` resource.

use axum::extract::State;
use axum::Json;

use bookstore_db::models::Category;
use bookstore_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}
