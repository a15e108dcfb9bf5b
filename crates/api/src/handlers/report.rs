//! Handlers for the `/report` resource: the PDF catalog and raw counts.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use roster_db::models::stats::Stats;
use roster_db::repositories::{CharacterRepo, StatsRepo, TeamRepo};

use crate::error::AppResult;
use crate::report::{render_pdf, ReportSnapshot};
use crate::state::AppState;

/// File name offered to the browser for the PDF download.
pub const REPORT_FILE_NAME: &str = "catalog_report.pdf";

/// GET /api/report/pdf
pub async fn pdf(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let snapshot = ReportSnapshot {
        generated_at: Utc::now(),
        stats: StatsRepo::counts(&state.pool).await?,
        characters: CharacterRepo::list_active(&state.pool).await?,
        teams: TeamRepo::list_active(&state.pool).await?,
    };
    let bytes = render_pdf(&snapshot)?;
    tracing::info!(
        characters = snapshot.characters.len(),
        teams = snapshot.teams.len(),
        size = bytes.len(),
        "PDF report generated",
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REPORT_FILE_NAME}\""),
            ),
        ],
        bytes,
    ))
}

/// GET /api/report/stats
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<Stats>> {
    let stats = StatsRepo::counts(&state.pool).await?;
    Ok(Json(stats))
}
