//! Handlers for the `/character_team` resource (character-team links).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use roster_core::types::DbId;
use roster_db::models::membership::{Membership, MembershipInput};
use roster_db::repositories::MembershipRepo;

use crate::error::{integrity_error, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/character_team
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Membership>>> {
    let memberships = MembershipRepo::list(&state.pool).await?;
    Ok(Json(memberships))
}

/// POST /api/character_team
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<MembershipInput>,
) -> AppResult<(StatusCode, Json<Membership>)> {
    let membership = MembershipRepo::create(&state.pool, &input)
        .await
        .map_err(integrity_error)?;
    tracing::info!(
        membership_id = membership.id,
        character_id = membership.character_id,
        team_id = membership.team_id,
        "Character linked to team",
    );
    Ok((StatusCode::CREATED, Json(membership)))
}

/// DELETE /api/character_team/{id}
///
/// Succeeds whether or not the link existed.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let removed = MembershipRepo::delete(&state.pool, id).await?;
    tracing::debug!(membership_id = id, removed, "Character-team link delete");
    Ok(Json(MessageResponse::new(
        "Character-Team relationship deleted",
    )))
}
