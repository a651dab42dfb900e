//! Route definitions for the `/wines` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::wines;
use crate::state::AppState;

/// Routes mounted at `/wines`. All require auth.
///
/// ```text
/// GET    /               -> list
/// POST   /               -> create
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update
/// DELETE /{id}           -> delete
/// GET    /barcode/{code} -> get_by_barcode
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(wines::list).post(wines::create))
        .route(
            "/{id}",
            get(wines::get_by_id)
                .put(wines::update)
                .delete(wines::delete),
        )
        .route("/barcode/{code}", get(wines::get_by_barcode))
}
