//! crates/dash_pipeline/src/dashboard.rs
//!
//! Ready phase: a loaded report bound to a surface.
//!
//! `render_ready` checks every scenario it will need before writing, so a
//! report that cannot be shown leaves the surface untouched. After that the
//! only mutation is `select_scenario`, which redraws the ranking view alone.

use dash_core::{Report, ScenarioKey};
use dash_io::{validate_report, LoadedReport};
use dash_report::{
    ranking_panel, render_daily_shares, render_daily_volume, render_header, render_kpis,
    render_ranking, targets, RankingPanel, ReportError, Surface,
};
use tracing::{debug, info, warn};

use crate::config::DashboardConfig;

#[derive(Debug)]
pub struct Dashboard {
    loaded: LoadedReport,
    config: DashboardConfig,
    selected: Option<ScenarioKey>,
}

impl Dashboard {
    pub fn report(&self) -> &Report {
        &self.loaded.report
    }

    pub fn digest(&self) -> Option<&str> {
        self.loaded.digest.as_deref()
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Currently shown scenario, if the report has any.
    pub fn selected(&self) -> Option<&ScenarioKey> {
        self.selected.as_ref()
    }

    /// Selection-change handler: re-render the ranking view for `key` only.
    ///
    /// An unknown key is rejected and the previous view stays in place.
    pub fn select_scenario<S: Surface + ?Sized>(
        &mut self,
        key: &ScenarioKey,
        surface: &mut S,
    ) -> Result<(), ReportError> {
        render_ranking(&self.loaded.report, key, &self.config.ranking, surface)?;
        debug!(scenario = %key, "scenario selected");
        self.selected = Some(key.clone());
        Ok(())
    }

    /// Ranking view of every scenario, in selection-control order.
    pub fn ranking_panels(&self) -> Result<Vec<RankingPanel>, ReportError> {
        self.loaded
            .report
            .scenario_keys()
            .map(|k| ranking_panel(&self.loaded.report, k, &self.config.ranking))
            .collect()
    }
}

/// Configured scenario, else the first KPI scenario present, else the first key.
fn initial_selection(report: &Report, config: &DashboardConfig) -> Result<Option<ScenarioKey>, ReportError> {
    if let Some(k) = &config.initial_scenario {
        return match report.scenario(k) {
            Some(_) => Ok(Some(k.clone())),
            None => Err(ReportError::UnknownScenario(k.clone())),
        };
    }
    let first_kpi = config.kpi_keys.iter().find(|k| report.scenario(k).is_some());
    Ok(first_kpi.or_else(|| report.scenario_keys().next()).cloned())
}

/// Render everything a freshly loaded report shows, in page order:
/// header, KPIs, daily volume, daily shares, selection control, ranking.
pub fn render_ready<S: Surface + ?Sized>(
    loaded: LoadedReport,
    config: DashboardConfig,
    surface: &mut S,
) -> Result<Dashboard, ReportError> {
    let report = &loaded.report;

    for finding in validate_report(report, &config.kpi_keys) {
        warn!(%finding, "report finding");
    }
    if let Some(missing) = config.kpi_keys.iter().find(|k| report.scenario(k).is_none()) {
        return Err(ReportError::UnknownScenario(missing.clone()));
    }
    let selected = initial_selection(report, &config)?;

    render_header(report, loaded.digest.as_deref(), config.lang, surface);
    render_kpis(report, &config.kpi_keys, surface)?;
    render_daily_volume(report, config.lang, surface);
    render_daily_shares(report, config.lang, surface);

    if let Some(key) = &selected {
        let options = report.scenario_keys().map(|k| k.as_str().to_owned()).collect();
        surface.bind_select(targets::SCENARIO_SELECT, options, key.as_str());
        render_ranking(report, key, &config.ranking, surface)?;
    }

    info!(
        scenarios = report.scenarios.len(),
        days = report.daily.len(),
        selected = selected.as_ref().map(ScenarioKey::as_str).unwrap_or("-"),
        "dashboard ready"
    );
    Ok(Dashboard { loaded, config, selected })
}
