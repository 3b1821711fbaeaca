//! dash_report: Presenters and export for the audit dashboard.
//!
//! Rules:
//! - No I/O here. Callers hand in an already-loaded `Report`.
//! - Presenters write to a `Surface` and fully replace what they own; calling
//!   one twice leaves the same visible state.
//! - Integers and percentages are formatted by `dash_core::format` (pt-BR).
//! - Chart input is Plotly figure JSON; the plotting engine is external.

#![deny(unsafe_code)]

use dash_core::ScenarioKey;
use thiserror::Error;

pub mod figure;
pub mod header;
pub mod i18n;
pub mod kpi;
pub mod page;
pub mod ranking;
#[cfg(feature = "render_html")]
pub mod render_html;
#[cfg(feature = "render_json")]
pub mod render_json;
pub mod surface;
pub mod timeseries;

pub use figure::Figure;
pub use header::render_header;
pub use i18n::Lang;
pub use kpi::render_kpis;
pub use page::Page;
#[cfg(feature = "render_html")]
pub use render_html::{render_html, ExportOptions};
#[cfg(feature = "render_json")]
pub use render_json::render_json;
pub use ranking::{ranking_panel, render_ranking, RankingOptions, RankingPanel};
pub use surface::{targets, Row, SelectControl, Surface};
pub use timeseries::{daily_shares_figure, daily_volume_figure, render_daily_shares, render_daily_volume};

#[derive(Debug, Error)]
pub enum ReportError {
    /// A scenario key the report does not contain.
    #[error("unknown scenario: {0}")]
    UnknownScenario(ScenarioKey),

    /// Export serialization failed.
    #[error("render failed: {0}")]
    Render(String),
}
