use axum::routing::get;
use axum::Router;

use crate::handlers::report;
use crate::state::AppState;

/// Routes mounted at `/report`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pdf", get(report::pdf))
        .route("/stats", get(report::stats))
}
