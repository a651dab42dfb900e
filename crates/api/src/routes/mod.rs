pub mod auth;
pub mod dashboard;
pub mod health;
pub mod vivino;
pub mod wines;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register            create account (public)
/// /auth/login               login (public)
/// /auth/refresh             refresh (public)
/// /auth/logout              logout (requires auth)
///
/// /wines                    list, create
/// /wines/{id}               get, update, delete
/// /wines/barcode/{code}     lookup by barcode
///
/// /vivino/sync              overwrite a bottle's rating metadata (POST)
///
/// /dashboard/stats          cellar totals and distributions
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/wines", wines::router())
        .nest("/vivino", vivino::router())
        .nest("/dashboard", dashboard::router())
}
