//! Handlers for the `/characters` resource.
//!
//! Reads return active characters only (lists) or any character by ID
//! (detail). Deletion is a soft delete that can be undone with `restore`.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use roster_core::error::CoreError;
use roster_core::naming::CHARACTER_IMAGE_FOLDER;
use roster_core::types::DbId;
use roster_core::validation::validate_input;
use roster_db::models::character::{Character, CharacterDetail, CharacterInput};
use roster_db::repositories::CharacterRepo;

use crate::error::{AppError, AppResult};
use crate::query::ListParams;
use crate::response::MessageResponse;
use crate::state::AppState;
use crate::upload::{store_image, MultipartForm};

/// Build and validate a [`CharacterInput`] from submitted form fields.
pub(crate) fn character_input(form: &MultipartForm, active: bool) -> Result<CharacterInput, CoreError> {
    let input = CharacterInput {
        name: form.required("name")?,
        alias: form.text("alias"),
        alignment: form.required("alignment")?,
        first_appearance: form.date("first_appearance")?,
        description: form.text("description"),
        active,
    };
    validate_input(&input)?;
    Ok(input)
}

/// GET /api/characters?q=&skip=&limit=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Character>>> {
    let characters = CharacterRepo::list(
        &state.pool,
        params.query(),
        params.offset(),
        params.limit(),
    )
    .await?;
    Ok(Json(characters))
}

/// GET /api/characters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CharacterDetail>> {
    let character = CharacterRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;
    Ok(Json(character))
}

/// POST /api/characters (multipart)
///
/// The image, if any, is uploaded before the row is inserted.
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Character>)> {
    let form = MultipartForm::read(multipart).await?;
    let input = character_input(&form, true)?;
    let image = store_image(&state, CHARACTER_IMAGE_FOLDER, &input.name, form.image).await?;
    let character = CharacterRepo::create(&state.pool, &input, &image).await?;
    tracing::info!(character_id = character.id, name = %character.name, "Character created");
    Ok((StatusCode::CREATED, Json(character)))
}

/// PUT /api/characters/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CharacterInput>,
) -> AppResult<Json<Character>> {
    validate_input(&input)?;
    let character = CharacterRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;
    Ok(Json(character))
}

/// DELETE /api/characters/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !CharacterRepo::soft_delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }));
    }
    tracing::info!(character_id = id, "Character soft-deleted");
    Ok(Json(MessageResponse::new("Character soft-deleted")))
}

/// PUT /api/characters/{id}/restore
pub async fn restore(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !CharacterRepo::restore(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }));
    }
    tracing::info!(character_id = id, "Character restored");
    Ok(Json(MessageResponse::new("Character restored")))
}
