//! PDF catalog report.
//!
//! [`render_pdf`] lays out a [`ReportSnapshot`] as plain text lines on A4
//! pages using the built-in Helvetica fonts, starting a new page whenever
//! the cursor reaches the bottom margin.

use printpdf::{BuiltinFont, Mm, PdfDocument};
use roster_core::types::Timestamp;
use roster_db::models::character::Character;
use roster_db::models::stats::Stats;
use roster_db::models::team::Team;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const LEFT_MARGIN_MM: f32 = 20.0;
const TOP_MM: f32 = 277.0;
const BOTTOM_MM: f32 = 20.0;
const LAYER_NAME: &str = "Layer 1";

pub const REPORT_TITLE: &str = "Character Catalog Report";

/// Error type for report rendering.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("PDF rendering failed: {0}")]
    Render(String),
}

/// Everything the report prints, captured at request time.
#[derive(Debug, Clone)]
pub struct ReportSnapshot {
    pub generated_at: Timestamp,
    pub stats: Stats,
    pub characters: Vec<Character>,
    pub teams: Vec<Team>,
}

/// One line of report text.
#[derive(Debug, Clone, PartialEq)]
struct Line {
    text: String,
    size: f32,
    bold: bool,
}

impl Line {
    fn heading(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: 14.0,
            bold: true,
        }
    }

    fn body(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: 10.0,
            bold: false,
        }
    }

    /// Vertical space consumed by the line.
    fn advance_mm(&self) -> f32 {
        self.size * 0.6
    }
}

/// Flatten a snapshot into printable lines.
fn layout(snapshot: &ReportSnapshot) -> Vec<Line> {
    let mut lines = vec![
        Line {
            text: REPORT_TITLE.to_string(),
            size: 18.0,
            bold: true,
        },
        Line::body(format!(
            "Generated {}",
            snapshot.generated_at.format("%Y-%m-%d %H:%M UTC")
        )),
        Line::body(""),
        Line::heading("Totals"),
        Line::body(format!("Characters: {}", snapshot.stats.characters)),
        Line::body(format!("Teams: {}", snapshot.stats.teams)),
        Line::body(format!("Secret identities: {}", snapshot.stats.identities)),
        Line::body(""),
        Line::heading(format!("Active characters ({})", snapshot.characters.len())),
    ];

    for c in &snapshot.characters {
        let alias = c
            .alias
            .as_deref()
            .map(|a| format!(" ({a})"))
            .unwrap_or_default();
        let first = c
            .first_appearance
            .map(|d| format!(", first appeared {d}"))
            .unwrap_or_default();
        lines.push(Line::body(format!(
            "#{} {}{} - {}{}",
            c.id, c.name, alias, c.alignment, first
        )));
    }

    lines.push(Line::body(""));
    lines.push(Line::heading(format!("Active teams ({})", snapshot.teams.len())));
    for t in &snapshot.teams {
        let founded = t
            .founded_date
            .map(|d| format!(", founded {d}"))
            .unwrap_or_default();
        lines.push(Line::body(format!("#{} {}{}", t.id, t.name, founded)));
    }

    lines
}

/// Render the snapshot to PDF bytes.
pub fn render_pdf(snapshot: &ReportSnapshot) -> Result<Vec<u8>, ReportError> {
    let (doc, page, layer) = PdfDocument::new(
        REPORT_TITLE,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        LAYER_NAME,
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Render(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ReportError::Render(e.to_string()))?;

    let mut current = doc.get_page(page).get_layer(layer);
    let mut y = TOP_MM;

    for line in layout(snapshot) {
        if y < BOTTOM_MM {
            let (next_page, next_layer) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
            current = doc.get_page(next_page).get_layer(next_layer);
            y = TOP_MM;
        }
        let font = if line.bold { &bold } else { &regular };
        if !line.text.is_empty() {
            current.use_text(line.text.as_str(), line.size, Mm(LEFT_MARGIN_MM), Mm(y), font);
        }
        y -= line.advance_mm();
    }

    doc.save_to_bytes()
        .map_err(|e| ReportError::Render(e.to_string()))
}
