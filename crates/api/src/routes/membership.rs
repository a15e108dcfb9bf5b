use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::membership;
use crate::state::AppState;

/// Routes mounted at `/character_team`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(membership::list).post(membership::create))
        .route("/{id}", delete(membership::delete))
}
