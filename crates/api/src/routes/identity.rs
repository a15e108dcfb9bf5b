use axum::routing::get;
use axum::Router;

use crate::handlers::identity;
use crate::state::AppState;

/// Routes mounted at `/identities`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(identity::list).post(identity::create))
        .route(
            "/{id}",
            get(identity::get_by_id)
                .put(identity::update)
                .delete(identity::delete),
        )
}
