//! crates/dash_report/src/timeseries.rs
//!
//! Daily charts. Both are pure projections of `report.daily`: one x-value
//! per record, in report order, no gap filling and no re-sorting.
//!
//! - volume: submissions as bars; unique e-mails and duplicates as lines on a
//!   secondary axis overlaying the first.
//! - shares: MÁRIO ROQUE share and suspicious-pattern share, percent axis.

use dash_core::{format_integer, DailyRecord, Report};
use tracing::debug;

use crate::figure::{
    date_axis, legend_below, Axis, Figure, Layout, Margin, PlotConfig, Series, Trace, XyTrace,
    FAINT_GRID, NO_GRID,
};
use crate::i18n::{t, Lang};
use crate::surface::{targets, Surface};

const VOLUME_MARGIN: Margin = Margin { t: 10, r: 40, b: 50, l: 50 };
const SHARES_MARGIN: Margin = Margin { t: 10, r: 20, b: 50, l: 50 };

fn dates(report: &Report) -> Vec<String> {
    report.dates().into_iter().map(str::to_owned).collect()
}

fn counts(report: &Report, f: impl Fn(&DailyRecord) -> u64) -> Series {
    Series::Counts(report.daily.iter().map(f).collect())
}

fn fractions(report: &Report, f: impl Fn(&DailyRecord) -> f64) -> Series {
    Series::Fractions(report.daily.iter().map(f).collect())
}

/// Hover text `"<n> votos"` per point, only when every record carries the count.
fn votes_text(report: &Report, lang: Lang, f: impl Fn(&DailyRecord) -> Option<u64>) -> Option<Vec<String>> {
    if report.daily.is_empty() {
        return None;
    }
    report
        .daily
        .iter()
        .map(|d| f(d).map(|n| format!("{} {}", format_integer(n), t(lang, "votes_unit"))))
        .collect()
}

fn line(name: &str, x: Vec<String>, y: Series, markers: bool) -> XyTrace {
    XyTrace {
        name: name.to_owned(),
        x,
        y,
        mode: Some(if markers { "lines+markers" } else { "lines" }.to_owned()),
        yaxis: None,
        text: None,
    }
}

pub fn daily_volume_figure(report: &Report, lang: Lang) -> Figure {
    let x = dates(report);

    let bars = XyTrace {
        name: t(lang, "submissions").to_owned(),
        x: x.clone(),
        y: counts(report, |d| d.submissions),
        mode: None,
        yaxis: None,
        text: None,
    };
    let mut unique = line(t(lang, "unique_emails"), x.clone(), counts(report, |d| d.unique_emails), true);
    unique.yaxis = Some("y2".into());
    let mut dupes = line(t(lang, "duplicates"), x, counts(report, |d| d.duplicates), false);
    dupes.yaxis = Some("y2".into());

    let mut layout = Layout::transparent(VOLUME_MARGIN);
    layout.barmode = Some("overlay".into());
    layout.xaxis = Some(date_axis());
    layout.yaxis = Some(Axis {
        title: Some(t(lang, "submissions").to_owned()),
        gridcolor: Some(FAINT_GRID.into()),
        ..Axis::default()
    });
    layout.yaxis2 = Some(Axis {
        title: Some(t(lang, "unique_dupes").to_owned()),
        overlaying: Some("y".into()),
        side: Some("right".into()),
        gridcolor: Some(NO_GRID.into()),
        ..Axis::default()
    });
    layout.legend = Some(legend_below());

    Figure {
        data: vec![Trace::Bar(bars), Trace::Scatter(unique), Trace::Scatter(dupes)],
        layout,
        config: PlotConfig::default(),
    }
}

pub fn daily_shares_figure(report: &Report, lang: Lang) -> Figure {
    let x = dates(report);

    let mut mario = line(t(lang, "mario_share"), x.clone(), fractions(report, |d| d.mario_share), true);
    mario.text = votes_text(report, lang, |d| d.mario_votes);
    let mut pattern = line(t(lang, "pattern_share"), x, fractions(report, |d| d.pattern_share), true);
    pattern.text = votes_text(report, lang, |d| d.pattern_votes);

    let mut layout = Layout::transparent(SHARES_MARGIN);
    layout.xaxis = Some(date_axis());
    layout.yaxis = Some(Axis {
        tickformat: Some(".0%".into()),
        gridcolor: Some(FAINT_GRID.into()),
        ..Axis::default()
    });
    layout.legend = Some(legend_below());

    Figure {
        data: vec![Trace::Scatter(mario), Trace::Scatter(pattern)],
        layout,
        config: PlotConfig::default(),
    }
}

pub fn render_daily_volume<S: Surface + ?Sized>(report: &Report, lang: Lang, surface: &mut S) {
    debug!(days = report.daily.len(), "daily volume rendered");
    surface.plot(targets::DAILY_VOLUME, daily_volume_figure(report, lang));
}

pub fn render_daily_shares<S: Surface + ?Sized>(report: &Report, lang: Lang, surface: &mut S) {
    debug!(days = report.daily.len(), "daily shares rendered");
    surface.plot(targets::DAILY_SHARES, daily_shares_figure(report, lang));
}
