//! Repository for the `wines` table.
//!
//! Every method takes the owning `user_id` and filters on it in SQL, so a
//! bottle belonging to another account is indistinguishable from one that
//! does not exist.

use cantina_core::types::DbId;
use cantina_core::vivino::VivinoUpdate;
use sqlx::PgPool;

use crate::models::wine::{CellarTotals, CreateWine, DistributionBucket, UpdateWine, Wine};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, producer, region, country, wine_type, vintage, \
     quantity, purchase_price, barcode, notes, \
     vivino_id, vivino_rating, vivino_rating_count, vivino_price, vivino_currency, \
     vivino_url, vivino_image_url, vivino_last_updated, \
     created_at, updated_at";

/// Provides owner-scoped CRUD and aggregation for bottles.
pub struct WineRepo;

impl WineRepo {
    /// Insert a new bottle for `user_id`, returning the created row.
    ///
    /// If `quantity` is `None` in the input, defaults to 1.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateWine,
    ) -> Result<Wine, sqlx::Error> {
        let query = format!(
            "INSERT INTO wines (user_id, name, producer, region, country, wine_type, vintage,
                                quantity, purchase_price, barcode, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, 1), $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Wine>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.producer)
            .bind(&input.region)
            .bind(&input.country)
            .bind(&input.wine_type)
            .bind(input.vintage)
            .bind(input.quantity)
            .bind(input.purchase_price)
            .bind(&input.barcode)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a bottle by id, scoped to its owner.
    pub async fn find_by_id_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Wine>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM wines WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Wine>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Find an owned bottle by barcode (scan-to-add duplicate check).
    pub async fn find_by_barcode_for_user(
        pool: &PgPool,
        barcode: &str,
        user_id: DbId,
    ) -> Result<Option<Wine>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM wines WHERE barcode = $1 AND user_id = $2
             ORDER BY created_at DESC LIMIT 1"
        );
        sqlx::query_as::<_, Wine>(&query)
            .bind(barcode)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's bottles, newest first.
    pub async fn list_by_owner(pool: &PgPool, user_id: DbId) -> Result<Vec<Wine>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM wines WHERE user_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Wine>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a bottle's cellar fields. Only non-`None` fields are applied.
    ///
    /// Returns `None` if the user owns no bottle with this id. The
    /// `vivino_*` columns are untouched by design.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateWine,
    ) -> Result<Option<Wine>, sqlx::Error> {
        let query = format!(
            "UPDATE wines SET
                name = COALESCE($3, name),
                producer = COALESCE($4, producer),
                region = COALESCE($5, region),
                country = COALESCE($6, country),
                wine_type = COALESCE($7, wine_type),
                vintage = COALESCE($8, vintage),
                quantity = COALESCE($9, quantity),
                purchase_price = COALESCE($10, purchase_price),
                barcode = COALESCE($11, barcode),
                notes = COALESCE($12, notes),
                updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Wine>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.producer)
            .bind(&input.region)
            .bind(&input.country)
            .bind(&input.wine_type)
            .bind(input.vintage)
            .bind(input.quantity)
            .bind(input.purchase_price)
            .bind(&input.barcode)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the Vivino columns of an owned bottle in one statement.
    ///
    /// Full overwrite, not a patch: every `vivino_*` column is set from the
    /// resolved update, so fields absent from the sync become NULL.
    /// `vivino_last_updated` always advances. The WHERE clause re-checks
    /// ownership so the update lands on zero rows if the bottle changed
    /// hands between lookup and write; callers must treat `None` as a
    /// persistence failure.
    pub async fn update_vivino(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        update: &VivinoUpdate,
    ) -> Result<Option<Wine>, sqlx::Error> {
        let query = format!(
            "UPDATE wines SET
                vivino_id = $3,
                vivino_rating = $4,
                vivino_rating_count = $5,
                vivino_price = $6,
                vivino_currency = $7,
                vivino_url = $8,
                vivino_image_url = $9,
                vivino_last_updated = NOW(),
                updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Wine>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&update.vivino_id)
            .bind(update.vivino_rating)
            .bind(update.vivino_rating_count)
            .bind(update.vivino_price)
            .bind(&update.vivino_currency)
            .bind(&update.vivino_url)
            .bind(&update.vivino_image_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a bottle. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM wines WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Owner-scoped cellar totals for the dashboard.
    pub async fn stats_totals(pool: &PgPool, user_id: DbId) -> Result<CellarTotals, sqlx::Error> {
        sqlx::query_as::<_, CellarTotals>(
            "SELECT
                COALESCE(SUM(quantity), 0)::BIGINT AS total_bottles,
                COUNT(*)::BIGINT AS distinct_wines,
                SUM(quantity * purchase_price) AS cellar_value,
                AVG(vivino_rating) AS average_vivino_rating
             FROM wines WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// Bottle counts grouped by wine type, largest bucket first.
    pub async fn stats_by_type(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<DistributionBucket>, sqlx::Error> {
        sqlx::query_as::<_, DistributionBucket>(
            "SELECT wine_type AS label, SUM(quantity)::BIGINT AS bottles
             FROM wines WHERE user_id = $1
             GROUP BY wine_type ORDER BY bottles DESC, label",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Bottle counts grouped by region, largest bucket first.
    ///
    /// Rows without a region are bucketed under `'Sconosciuta'`.
    pub async fn stats_by_region(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<DistributionBucket>, sqlx::Error> {
        sqlx::query_as::<_, DistributionBucket>(
            "SELECT COALESCE(region, 'Sconosciuta') AS label, SUM(quantity)::BIGINT AS bottles
             FROM wines WHERE user_id = $1
             GROUP BY COALESCE(region, 'Sconosciuta') ORDER BY bottles DESC, label",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
