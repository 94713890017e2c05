//! Handlers for the `/api/authors` resource.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use bookstore_core::types::DbId;
use bookstore_db::repositories::AuthorRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// The REST author listing exposes only `{id, name}`; the full author
/// record (birthday, address) is available through GraphQL.
#[derive(Debug, Serialize)]
pub struct AuthorSummary {
    pub id: DbId,
    pub name: String,
}

/// GET /api/authors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<AuthorSummary>>> {
    let authors = AuthorRepo::list(&state.pool).await?;
    let summaries = authors
        .into_iter()
        .map(|a| AuthorSummary {
            id: a.id,
            name: a.name,
        })
        .collect();
    Ok(Json(summaries))
}
