//! Server-rendered HTML pages.
//!
//! Form submissions redirect (303) back to the character listing. A form
//! that fails validation is rendered again with the message and the
//! submitted values, with status 400.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use minijinja::context;
use roster_core::naming::CHARACTER_IMAGE_FOLDER;
use roster_core::types::DbId;
use roster_db::repositories::{CharacterRepo, StatsRepo, TeamRepo};

use crate::error::AppResult;
use crate::handlers::character::character_input;
use crate::query::ListParams;
use crate::state::AppState;
use crate::upload::{store_image, MultipartForm};

const CHARACTERS_PAGE: &str = "/characters";

/// GET /
pub async fn home(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Html<String>> {
    let characters = CharacterRepo::list(
        &state.pool,
        params.query(),
        params.offset(),
        params.limit(),
    )
    .await?;
    let html = state.templates.render(
        "index.html",
        context! { q => params.query(), characters => characters },
    )?;
    Ok(html)
}

/// GET /characters
pub async fn characters_page(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Html<String>> {
    let characters = CharacterRepo::list(
        &state.pool,
        params.query(),
        params.offset(),
        params.limit(),
    )
    .await?;
    let html = state.templates.render(
        "characters_list.html",
        context! { q => params.query(), characters => characters },
    )?;
    Ok(html)
}

/// GET /characters/new
pub async fn new_character_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    let html = state
        .templates
        .render("characters_new.html", context! { character => context! {} })?;
    Ok(html)
}

/// POST /characters/new
pub async fn create_character(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Response> {
    let form = MultipartForm::read(multipart).await?;
    let input = match character_input(&form, true) {
        Ok(input) => input,
        Err(err) => {
            let html = state.templates.render(
                "characters_new.html",
                context! { character => form.values(), error => err.to_string() },
            )?;
            return Ok((StatusCode::BAD_REQUEST, html).into_response());
        }
    };

    let image = store_image(&state, CHARACTER_IMAGE_FOLDER, &input.name, form.image).await?;
    let character = CharacterRepo::create(&state.pool, &input, &image).await?;
    tracing::info!(character_id = character.id, "Character created from form");
    Ok(Redirect::to(CHARACTERS_PAGE).into_response())
}

/// GET /characters/edit/{id}
pub async fn edit_character_page(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let Some(character) = CharacterRepo::find_by_id(&state.pool, id).await? else {
        return Ok(Redirect::to(CHARACTERS_PAGE).into_response());
    };
    let html = state.templates.render(
        "characters_edit.html",
        context! { character_id => id, character => character },
    )?;
    Ok(html.into_response())
}

/// POST /characters/edit/{id}
///
/// Full replace of the editable fields; the active flag is kept as stored.
/// A newly uploaded image replaces the old one.
pub async fn update_character(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Response> {
    let form = MultipartForm::read(multipart).await?;
    let Some(existing) = CharacterRepo::find_by_id(&state.pool, id).await? else {
        return Ok(Redirect::to(CHARACTERS_PAGE).into_response());
    };
    let input = match character_input(&form, existing.active) {
        Ok(input) => input,
        Err(err) => {
            let html = state.templates.render(
                "characters_edit.html",
                context! {
                    character_id => id,
                    character => form.values(),
                    error => err.to_string(),
                },
            )?;
            return Ok((StatusCode::BAD_REQUEST, html).into_response());
        }
    };

    let image = store_image(&state, CHARACTER_IMAGE_FOLDER, &input.name, form.image).await?;
    if !image.is_empty() {
        CharacterRepo::set_image(&state.pool, id, &image).await?;
    }
    CharacterRepo::update(&state.pool, id, &input).await?;
    tracing::info!(character_id = id, "Character updated from form");
    Ok(Redirect::to(CHARACTERS_PAGE).into_response())
}

/// POST /characters/delete/{id}
pub async fn delete_character(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Redirect> {
    let found = CharacterRepo::soft_delete(&state.pool, id).await?;
    tracing::info!(character_id = id, found, "Character soft-deleted from form");
    Ok(Redirect::to(CHARACTERS_PAGE))
}

/// GET /teams
pub async fn teams_page(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Html<String>> {
    let teams = TeamRepo::list(
        &state.pool,
        params.query(),
        params.offset(),
        params.limit(),
    )
    .await?;
    let html = state.templates.render(
        "teams_list.html",
        context! { q => params.query(), teams => teams },
    )?;
    Ok(html)
}

/// GET /dashboard
pub async fn dashboard(State(state): State<AppState>) -> AppResult<Html<String>> {
    let stats = StatsRepo::counts(&state.pool).await?;
    let html = state
        .templates
        .render("dashboard.html", context! { stats => stats })?;
    Ok(html)
}
