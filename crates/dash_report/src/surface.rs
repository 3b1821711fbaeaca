//! crates/dash_report/src/surface.rs
//!
//! The display contract presenters write to. It mirrors what a browser page
//! offers: labeled text targets, table bodies, chart regions, one selection
//! control, and a blocking notification. Every call replaces the addressed
//! content; nothing is appended except notifications.

use crate::figure::Figure;

/// One table row, already formatted for display.
pub type Row = Vec<String>;

/// State of a `<select>`-like control.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SelectControl {
    pub options: Vec<String>,
    pub selected: String,
}

pub trait Surface {
    /// Replace the text of a labeled target.
    fn set_text(&mut self, target: &str, text: &str);

    /// Replace every row of a table body.
    fn replace_table_body(&mut self, table: &str, rows: Vec<Row>);

    /// Replace the figure plotted in a chart region.
    fn plot(&mut self, region: &str, figure: Figure);

    /// Populate a selection control and set its current value.
    fn bind_select(&mut self, control: &str, options: Vec<String>, selected: &str);

    /// Show a blocking, user-visible message.
    fn notify(&mut self, message: &str);
}

/// Stable identifiers of the page regions.
pub mod targets {
    /// KPI text targets for scenarios A, B, C.
    pub const KPI_TOTALS: [&str; 3] = ["kpiTotalA", "kpiTotalB", "kpiTotalC"];

    pub const RANKING_TABLE: &str = "rankingTable";
    pub const PIE_SCENARIO: &str = "pieScenario";
    pub const DAILY_VOLUME: &str = "chartDailyVolume";
    pub const DAILY_SHARES: &str = "chartDailyShares";
    pub const SCENARIO_SELECT: &str = "scenario";

    pub const REPORT_TITLE: &str = "reportTitle";
    pub const GENERATED_AT: &str = "generatedAt";
    pub const RULES_TABLE: &str = "rulesTable";
    pub const REPORT_DIGEST: &str = "reportDigest";
}
