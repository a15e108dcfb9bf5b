use axum::routing::{get, put};
use axum::Router;

use crate::handlers::team;
use crate::state::AppState;

/// Routes mounted at `/teams`.
///
/// ```text
/// GET    /               -> list
/// POST   /               -> create
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update
/// DELETE /{id}           -> delete
/// PUT    /{id}/restore   -> restore
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(team::list).post(team::create))
        .route(
            "/{id}",
            get(team::get_by_id)
                .put(team::update)
                .delete(team::delete),
        )
        .route("/{id}/restore", put(team::restore))
}
