//! Handlers for the `/teams` resource.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use roster_core::error::CoreError;
use roster_core::naming::TEAM_IMAGE_FOLDER;
use roster_core::types::DbId;
use roster_core::validation::validate_input;
use roster_db::models::team::{Team, TeamDetail, TeamInput};
use roster_db::repositories::TeamRepo;

use crate::error::{AppError, AppResult};
use crate::query::ListParams;
use crate::response::MessageResponse;
use crate::state::AppState;
use crate::upload::{store_image, MultipartForm};

fn team_input(form: &MultipartForm) -> Result<TeamInput, CoreError> {
    let input = TeamInput {
        name: form.required("name")?,
        founded_date: form.date("founded_date")?,
        description: form.text("description"),
        active: true,
    };
    validate_input(&input)?;
    Ok(input)
}

/// GET /api/teams?q=&skip=&limit=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Team>>> {
    let teams = TeamRepo::list(
        &state.pool,
        params.query(),
        params.offset(),
        params.limit(),
    )
    .await?;
    Ok(Json(teams))
}

/// GET /api/teams/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TeamDetail>> {
    let team = TeamRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Team", id }))?;
    Ok(Json(team))
}

/// POST /api/teams (multipart)
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Team>)> {
    let form = MultipartForm::read(multipart).await?;
    let input = team_input(&form)?;
    let image = store_image(&state, TEAM_IMAGE_FOLDER, &input.name, form.image).await?;
    let team = TeamRepo::create(&state.pool, &input, &image).await?;
    tracing::info!(team_id = team.id, name = %team.name, "Team created");
    Ok((StatusCode::CREATED, Json(team)))
}

/// PUT /api/teams/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<TeamInput>,
) -> AppResult<Json<Team>> {
    validate_input(&input)?;
    let team = TeamRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Team", id }))?;
    Ok(Json(team))
}

/// DELETE /api/teams/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !TeamRepo::soft_delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Team", id }));
    }
    tracing::info!(team_id = id, "Team soft-deleted");
    Ok(Json(MessageResponse::new("Team soft-deleted")))
}

/// PUT /api/teams/{id}/restore
pub async fn restore(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !TeamRepo::restore(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Team", id }));
    }
    tracing::info!(team_id = id, "Team restored");
    Ok(Json(MessageResponse::new("Team restored")))
}
