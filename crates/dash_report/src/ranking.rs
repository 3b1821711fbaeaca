//! crates/dash_report/src/ranking.rs
//!
//! Ranking view for one scenario: a table of every ranked entry and a pie
//! of the leading entries. Both follow the report's order; nothing here
//! sorts. Rendering fully replaces the table body and the chart.

use dash_core::{censor_name, format_integer, format_percent, Report, ScenarioKey};
use tracing::debug;

use crate::figure::{Figure, Layout, Margin, PieTrace, PlotConfig, Trace};
use crate::i18n::{t, Lang};
use crate::page::Page;
use crate::surface::{targets, Row, Surface};
use crate::ReportError;

pub const DEFAULT_PIE_LIMIT: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankingOptions {
    /// Maximum number of pie slices.
    pub pie_limit: usize,
    /// Show names censored in both table and chart.
    pub censor_names: bool,
    pub lang: Lang,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self { pie_limit: DEFAULT_PIE_LIMIT, censor_names: false, lang: Lang::PtBr }
    }
}

impl RankingOptions {
    fn display_name(&self, name: &str) -> String {
        if self.censor_names {
            censor_name(name)
        } else {
            name.to_owned()
        }
    }
}

/// Render `key`'s ranking into `rankingTable` and `pieScenario`.
pub fn render_ranking<S: Surface + ?Sized>(
    report: &Report,
    key: &ScenarioKey,
    opts: &RankingOptions,
    surface: &mut S,
) -> Result<(), ReportError> {
    let scenario = report
        .scenario(key)
        .ok_or_else(|| ReportError::UnknownScenario(key.clone()))?;

    let rows: Vec<Row> = scenario
        .top
        .iter()
        .map(|e| vec![opts.display_name(&e.name), format_integer(e.votes), format_percent(e.share)])
        .collect();

    let head = scenario.head(opts.pie_limit);
    let pie = PieTrace {
        labels: head.iter().map(|e| opts.display_name(&e.name)).collect(),
        values: head.iter().map(|e| e.votes).collect(),
        textinfo: "label+percent".into(),
        hovertemplate: format!(
            "%{{label}}<br>%{{value}} {}<br>%{{percent}}<extra></extra>",
            t(opts.lang, "votes_unit")
        ),
        sort: false,
    };
    let mut layout = Layout::transparent(Margin { t: 10, r: 10, b: 10, l: 10 });
    layout.showlegend = Some(false);

    debug!(scenario = %key, rows = rows.len(), slices = head.len(), "ranking rendered");
    surface.replace_table_body(targets::RANKING_TABLE, rows);
    surface.plot(
        targets::PIE_SCENARIO,
        Figure { data: vec![Trace::Pie(pie)], layout, config: PlotConfig::default() },
    );
    Ok(())
}

/// Pre-rendered ranking view of one scenario, used by static exports.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RankingPanel {
    pub key: ScenarioKey,
    pub rows: Vec<Row>,
    pub figure: Figure,
}

/// Render `key` through `render_ranking` into a scratch page and keep the result.
pub fn ranking_panel(
    report: &Report,
    key: &ScenarioKey,
    opts: &RankingOptions,
) -> Result<RankingPanel, ReportError> {
    let mut scratch = Page::new();
    render_ranking(report, key, opts, &mut scratch)?;
    let rows = scratch.tables.remove(targets::RANKING_TABLE).unwrap_or_default();
    let figure = scratch
        .charts
        .remove(targets::PIE_SCENARIO)
        .ok_or_else(|| ReportError::Render(format!("no pie rendered for {key}")))?;
    Ok(RankingPanel { key: key.clone(), rows, figure })
}
