//! Handlers for the `/identities` resource.
//!
//! A referenced character that does not exist is reported as 400 via
//! [`integrity_error`], as is a character that already owns an identity.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use roster_core::error::CoreError;
use roster_core::types::DbId;
use roster_core::validation::validate_input;
use roster_db::models::identity::{SecretIdentity, SecretIdentityInput};
use roster_db::repositories::IdentityRepo;

use crate::error::{integrity_error, AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/identities
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<SecretIdentity>>> {
    let identities = IdentityRepo::list(&state.pool).await?;
    Ok(Json(identities))
}

/// GET /api/identities/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SecretIdentity>> {
    let identity = IdentityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SecretIdentity",
            id,
        }))?;
    Ok(Json(identity))
}

/// POST /api/identities
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<SecretIdentityInput>,
) -> AppResult<(StatusCode, Json<SecretIdentity>)> {
    validate_input(&input)?;
    let identity = IdentityRepo::create(&state.pool, &input)
        .await
        .map_err(integrity_error)?;
    tracing::info!(
        identity_id = identity.id,
        character_id = identity.character_id,
        "Secret identity created",
    );
    Ok((StatusCode::CREATED, Json(identity)))
}

/// PUT /api/identities/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SecretIdentityInput>,
) -> AppResult<Json<SecretIdentity>> {
    validate_input(&input)?;
    let identity = IdentityRepo::update(&state.pool, id, &input)
        .await
        .map_err(integrity_error)?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SecretIdentity",
            id,
        }))?;
    Ok(Json(identity))
}

/// DELETE /api/identities/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !IdentityRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "SecretIdentity",
            id,
        }));
    }
    Ok(Json(MessageResponse::new("Identity deleted")))
}
