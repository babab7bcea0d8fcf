//! Route definitions for the `/airports` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::airports;
use crate::state::AppState;

/// Routes for the `/airports` resource.
///
/// ```text
/// GET    /airports/                  -> list
/// POST   /airports/                  -> create
/// GET    /airports/{airport_code}    -> get_by_code
/// PUT    /airports/{airport_code}    -> update
/// DELETE /airports/{airport_code}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/airports/", get(airports::list).post(airports::create))
        .route(
            "/airports/{airport_code}",
            get(airports::get_by_code)
                .put(airports::update)
                .delete(airports::delete),
        )
}
