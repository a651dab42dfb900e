//! Vivino rating-metadata bundle and its merge semantics.
//!
//! A sync request carries a [`VivinoData`] bundle as supplied by the
//! client. Merging it into a bottle is a full overwrite of every
//! Vivino-sourced column, not a patch: a field absent from the bundle
//! clears the stored value instead of preserving it. The only default
//! applied is the currency, since Vivino price lookups omit it for
//! euro-denominated markets.

use serde::Deserialize;

/// Currency assumed when the bundle carries a price without one.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Rating metadata as received from the client, all fields optional.
///
/// Unknown keys in the incoming object are ignored by serde.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VivinoData {
    pub id: Option<String>,
    pub rating: Option<f64>,
    pub rating_count: Option<i32>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
}

/// The resolved column values a sync writes to a bottle.
///
/// Every field maps one-to-one onto a `vivino_*` column. Fields that are
/// `None` here are persisted as SQL `NULL`; the currency is always set.
#[derive(Debug, Clone, PartialEq)]
pub struct VivinoUpdate {
    pub vivino_id: Option<String>,
    pub vivino_rating: Option<f64>,
    pub vivino_rating_count: Option<i32>,
    pub vivino_price: Option<f64>,
    pub vivino_currency: String,
    pub vivino_url: Option<String>,
    pub vivino_image_url: Option<String>,
}

impl VivinoUpdate {
    /// Resolve a client bundle into the values to persist.
    pub fn from_data(data: VivinoData) -> Self {
        Self {
            vivino_id: data.id,
            vivino_rating: data.rating,
            vivino_rating_count: data.rating_count,
            vivino_price: data.price,
            vivino_currency: data
                .currency
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            vivino_url: data.url,
            vivino_image_url: data.image_url,
        }
    }
}
