//! Wine bottle model, DTOs, and dashboard aggregation rows.

use cantina_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A bottle row from the `wines` table.
///
/// `user_id` is the owning account; every query touching this table is
/// filtered on it. The `vivino_*` columns are externally sourced and only
/// ever written as a group by [`crate::repositories::WineRepo::update_vivino`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Wine {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub producer: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub wine_type: String,
    pub vintage: Option<i32>,
    pub quantity: i32,
    pub purchase_price: Option<f64>,
    pub barcode: Option<String>,
    pub notes: Option<String>,
    pub vivino_id: Option<String>,
    pub vivino_rating: Option<f64>,
    pub vivino_rating_count: Option<i32>,
    pub vivino_price: Option<f64>,
    pub vivino_currency: Option<String>,
    pub vivino_url: Option<String>,
    pub vivino_image_url: Option<String>,
    pub vivino_last_updated: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding a bottle. The owner comes from the session, never the body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWine {
    pub name: String,
    pub producer: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub wine_type: String,
    pub vintage: Option<i32>,
    /// Defaults to 1 if omitted.
    pub quantity: Option<i32>,
    pub purchase_price: Option<f64>,
    pub barcode: Option<String>,
    pub notes: Option<String>,
}

/// DTO for updating a bottle's cellar fields. All fields are optional.
///
/// Deliberately excludes the `vivino_*` columns (written only by a sync)
/// and `user_id` (never reassigned).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateWine {
    pub name: Option<String>,
    pub producer: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub wine_type: Option<String>,
    pub vintage: Option<i32>,
    pub quantity: Option<i32>,
    pub purchase_price: Option<f64>,
    pub barcode: Option<String>,
    pub notes: Option<String>,
}

/// One bucket of a GROUP BY distribution (by type, by region).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DistributionBucket {
    pub label: String,
    pub bottles: i64,
}

/// Owner-scoped cellar totals.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CellarTotals {
    /// Sum of `quantity` over all bottles; 0 for an empty cellar.
    pub total_bottles: i64,
    /// Number of distinct wine rows.
    pub distinct_wines: i64,
    /// Sum of `quantity * purchase_price` over priced rows only.
    pub cellar_value: Option<f64>,
    /// Mean `vivino_rating` over rated rows only.
    pub average_vivino_rating: Option<f64>,
}
