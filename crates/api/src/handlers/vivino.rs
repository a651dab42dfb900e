//! Handler for the Vivino metadata sync endpoint.
//!
//! A sync overwrites the `vivino_*` columns of one owned bottle with the
//! rating metadata supplied by the client. The guard stages run in strict
//! order and each one short-circuits: authentication (extractor), input
//! validation, ownership lookup, conditioned write.

use axum::extract::State;
use axum::Json;
use cantina_core::error::CoreError;
use cantina_core::types::DbId;
use cantina_core::vivino::{VivinoData, VivinoUpdate};
use cantina_db::models::wine::Wine;
use cantina_db::repositories::WineRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /vivino/sync`.
///
/// `vivino_data` is taken as a raw JSON value so that a missing field and
/// a malformed one produce the same client-facing validation error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncRequest {
    #[serde(default)]
    pub wine_id: Option<String>,
    #[serde(default)]
    pub vivino_data: Option<serde_json::Value>,
}

/// Response for a successful sync.
#[derive(Debug, Serialize)]
pub struct SyncResponse {
    pub success: bool,
    pub wine: Wine,
}

/// Client-facing message for a missing or malformed sync body.
const INVALID_SYNC_REQUEST: &str = "wineId e vivinoData obbligatori";

/// POST /api/vivino/sync
///
/// Overwrite a bottle's Vivino metadata. The bottle must belong to the
/// authenticated caller; a bottle owned by someone else is reported as
/// not found, never as forbidden, so the existence of other accounts'
/// records is not disclosed.
pub async fn sync(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(body): Json<SyncRequest>,
) -> AppResult<Json<SyncResponse>> {
    // Input validation: both fields are required, and vivinoData must be
    // an object with recognizable values.
    let wine_id = body
        .wine_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest(INVALID_SYNC_REQUEST.into()))?;

    let data = body
        .vivino_data
        .filter(serde_json::Value::is_object)
        .ok_or_else(|| AppError::BadRequest(INVALID_SYNC_REQUEST.into()))?;

    let data: VivinoData = serde_json::from_value(data)
        .map_err(|_| AppError::BadRequest(INVALID_SYNC_REQUEST.into()))?;

    // Ownership lookup. The wire id is a string; one that does not parse
    // as a database id can never name a row, so it falls through to the
    // same not-found signal as an absent or foreign-owned bottle.
    let wine_id: DbId = wine_id.parse().unwrap_or(0);

    let wine = WineRepo::find_by_id_for_user(&state.pool, wine_id, auth_user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vino",
            id: wine_id,
        }))?;

    // Merge & persist: one UPDATE, conditioned again on ownership. Zero
    // affected rows means the bottle changed hands between lookup and
    // write; surface it as an internal fault rather than leaking why.
    let update = VivinoUpdate::from_data(data);
    let updated = WineRepo::update_vivino(&state.pool, wine.id, auth_user.user_id, &update)
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!(
                "Vivino sync for wine {} matched on lookup but updated zero rows",
                wine.id
            ))
        })?;

    tracing::info!(
        user_id = auth_user.user_id,
        wine_id = updated.id,
        vivino_id = updated.vivino_id.as_deref().unwrap_or("-"),
        "Vivino metadata synced"
    );

    Ok(Json(SyncResponse {
        success: true,
        wine: updated,
    }))
}
