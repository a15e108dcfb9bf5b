pub mod character;
pub mod health;
pub mod identity;
pub mod membership;
pub mod pages;
pub mod report;
pub mod team;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /characters                       list (?q=&skip=&limit=), create (multipart)
/// /characters/{id}                  detail, full replace, soft delete
/// /characters/{id}/restore          restore (PUT)
///
/// /teams                            list (?q=&skip=&limit=), create (multipart)
/// /teams/{id}                       detail, full replace, soft delete
/// /teams/{id}/restore               restore (PUT)
///
/// /identities                       list, create
/// /identities/{id}                  get, update, delete
///
/// /character_team                   list, create
/// /character_team/{id}              delete
///
/// /report/pdf                       PDF catalog download
/// /report/stats                     entity counts
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/characters", character::router())
        .nest("/teams", team::router())
        .nest("/identities", identity::router())
        .nest("/character_team", membership::router())
        .nest("/report", report::router())
}
