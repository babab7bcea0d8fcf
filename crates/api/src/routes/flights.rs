//! Route definitions for the `/flights` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::flights;
use crate::state::AppState;

/// Routes for the `/flights` resource.
///
/// ```text
/// GET    /flights/               -> list
/// POST   /flights/               -> create
/// GET    /flights/{flight_id}    -> get_by_id
/// PUT    /flights/{flight_id}    -> update
/// DELETE /flights/{flight_id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/flights/", get(flights::list).post(flights::create))
        .route(
            "/flights/{flight_id}",
            get(flights::get_by_id)
                .put(flights::update)
                .delete(flights::delete),
        )
}
