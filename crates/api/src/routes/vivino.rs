//! Route definitions for the `/vivino` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::vivino;
use crate::state::AppState;

/// Routes mounted at `/vivino`.
///
/// ```text
/// POST /sync -> sync (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/sync", post(vivino::sync))
}
