//! Handler for the dashboard statistics endpoint.
//!
//! Serves the numbers behind the cellar charts (type and region
//! distributions) plus headline totals. Aggregation happens in SQL; this
//! handler only assembles the payload.

use axum::extract::State;
use axum::Json;
use cantina_db::models::wine::{CellarTotals, DistributionBucket};
use cantina_db::repositories::WineRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Response for `GET /dashboard/stats`.
#[derive(Debug, Serialize)]
pub struct CellarStats {
    pub total_bottles: i64,
    pub distinct_wines: i64,
    pub cellar_value: Option<f64>,
    pub average_vivino_rating: Option<f64>,
    pub by_type: Vec<DistributionBucket>,
    pub by_region: Vec<DistributionBucket>,
}

/// GET /api/dashboard/stats
///
/// Owner-scoped cellar aggregates in a single payload.
pub async fn stats(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<CellarStats>> {
    let CellarTotals {
        total_bottles,
        distinct_wines,
        cellar_value,
        average_vivino_rating,
    } = WineRepo::stats_totals(&state.pool, auth_user.user_id).await?;

    let by_type = WineRepo::stats_by_type(&state.pool, auth_user.user_id).await?;
    let by_region = WineRepo::stats_by_region(&state.pool, auth_user.user_id).await?;

    Ok(Json(CellarStats {
        total_bottles,
        distinct_wines,
        cellar_value,
        average_vivino_rating,
        by_type,
        by_region,
    }))
}
