pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /books            GET list, POST create
/// /books/{id}       GET, PUT, DELETE (soft)
/// /categories       GET list
/// /authors          GET list (id + name only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/books",
            get(handlers::books::list).post(handlers::books::create),
        )
        .route(
            "/books/{id}",
            get(handlers::books::get_by_id)
                .put(handlers::books::update)
                .delete(handlers::books::delete),
        )
        .route("/categories", get(handlers::categories::list))
        .route("/authors", get(handlers::authors::list))
}
