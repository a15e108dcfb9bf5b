use axum::routing::{get, post};
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// HTML page routes, mounted at the root.
///
/// ```text
/// GET        /                        -> home
/// GET        /characters              -> characters_page
/// GET, POST  /characters/new          -> new form, create
/// GET, POST  /characters/edit/{id}    -> edit form, update
/// POST       /characters/delete/{id}  -> soft delete
/// GET        /teams                   -> teams_page
/// GET        /dashboard               -> dashboard
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/characters", get(pages::characters_page))
        .route(
            "/characters/new",
            get(pages::new_character_page).post(pages::create_character),
        )
        .route(
            "/characters/edit/{id}",
            get(pages::edit_character_page).post(pages::update_character),
        )
        .route("/characters/delete/{id}", post(pages::delete_character))
        .route("/teams", get(pages::teams_page))
        .route("/dashboard", get(pages::dashboard))
}
