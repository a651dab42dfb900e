//! Handlers for the `/wines` resource (owner-scoped bottle CRUD).
//!
//! Every handler resolves the caller via [`AuthUser`] and passes the
//! caller's id down to the repository, which filters on it in SQL. A
//! bottle owned by another account is therefore reported as not found.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cantina_core::error::CoreError;
use cantina_core::types::DbId;
use cantina_db::models::wine::{CreateWine, UpdateWine, Wine};
use cantina_db::repositories::WineRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/wines
///
/// List the caller's bottles, newest first.
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<Vec<Wine>>> {
    let wines = WineRepo::list_by_owner(&state.pool, auth_user.user_id).await?;
    Ok(Json(wines))
}

/// POST /api/wines
///
/// Add a bottle to the caller's cellar. Returns 201 with the created row.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateWine>,
) -> AppResult<(StatusCode, Json<Wine>)> {
    if input.name.trim().is_empty() || input.wine_type.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "nome e tipo del vino obbligatori".into(),
        )));
    }

    let wine = WineRepo::create(&state.pool, auth_user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(wine)))
}

/// GET /api/wines/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Wine>> {
    let wine = WineRepo::find_by_id_for_user(&state.pool, id, auth_user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Vino", id }))?;
    Ok(Json(wine))
}

/// PUT /api/wines/{id}
///
/// Partial update of a bottle's cellar fields. Vivino columns are only
/// ever written by a sync and are not reachable from here.
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWine>,
) -> AppResult<Json<Wine>> {
    let wine = WineRepo::update(&state.pool, id, auth_user.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Vino", id }))?;
    Ok(Json(wine))
}

/// DELETE /api/wines/{id}
///
/// Remove a bottle. Returns 204 No Content.
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = WineRepo::delete(&state.pool, id, auth_user.user_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Vino", id }));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/wines/barcode/{code}
///
/// Look up an owned bottle by barcode. The scan flow uses this to decide
/// between incrementing an existing bottle and creating a new one.
pub async fn get_by_barcode(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(code): Path<String>,
) -> AppResult<Json<Wine>> {
    let wine = WineRepo::find_by_barcode_for_user(&state.pool, &code, auth_user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vino",
            id: 0,
        }))?;
    Ok(Json(wine))
}
