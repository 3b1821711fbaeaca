//! crates/dash_report/src/render_json.rs
//! Page state (plus pre-rendered ranking panels) as pretty JSON.
//! Map-backed fields serialize in key order, so output is stable.

use serde::Serialize;

use crate::page::Page;
use crate::ranking::RankingPanel;
use crate::ReportError;

#[derive(Serialize)]
struct Export<'a> {
    #[serde(flatten)]
    page: &'a Page,
    #[serde(skip_serializing_if = "no_panels")]
    rankings: &'a [RankingPanel],
}

fn no_panels(p: &&[RankingPanel]) -> bool {
    p.is_empty()
}

pub fn render_json(page: &Page, panels: &[RankingPanel]) -> Result<String, ReportError> {
    serde_json::to_string_pretty(&Export { page, rankings: panels })
        .map_err(|e| ReportError::Render(e.to_string()))
}
