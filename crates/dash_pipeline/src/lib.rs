//! dash_pipeline: dashboard startup (fetch → validate → render) and the
//! selection handler.
//!
//! Startup is two phases, strictly ordered:
//! 1. `fetch_report`: one attempt to bring the report into memory.
//! 2. `render_ready`: header, KPIs, daily charts, selection control, ranking.
//!
//! A failure in either phase is terminal: it is logged once, the surface gets
//! exactly one notification, and nothing else is drawn. There is no retry.

#![forbid(unsafe_code)]

use dash_io::{LoadError, LoadedReport, ReportLoader};
use dash_report::i18n::t;
use dash_report::{ReportError, Surface};
use thiserror::Error;
use tracing::{error, info};

pub mod config;
pub mod dashboard;

pub use config::DashboardConfig;
pub use dashboard::{render_ready, Dashboard};

/// Single error surface for startup.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Render(#[from] ReportError),
}

/// Startup state of the dashboard.
#[derive(Debug)]
pub enum Phase {
    Loading,
    Ready(Dashboard),
    Failed(PipelineError),
}

impl Phase {
    pub fn is_ready(&self) -> bool {
        matches!(self, Phase::Ready(_))
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        match self {
            Phase::Ready(d) => Some(d),
            _ => None,
        }
    }

    pub fn dashboard_mut(&mut self) -> Option<&mut Dashboard> {
        match self {
            Phase::Ready(d) => Some(d),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&PipelineError> {
        match self {
            Phase::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Phase 1: fetch and decode the report. Nothing is rendered here.
pub async fn fetch_report(loader: &ReportLoader) -> Result<LoadedReport, LoadError> {
    loader.load().await
}

/// Run both phases against `surface` and return where startup ended.
pub async fn start<S: Surface + ?Sized>(
    loader: &ReportLoader,
    surface: &mut S,
    config: DashboardConfig,
) -> Phase {
    let lang = config.lang;
    info!(source = %loader.describe(), "dashboard loading");

    let outcome = match fetch_report(loader).await {
        Ok(loaded) => render_ready(loaded, config, surface).map_err(PipelineError::from),
        Err(e) => Err(PipelineError::from(e)),
    };

    match outcome {
        Ok(dashboard) => Phase::Ready(dashboard),
        Err(e) => {
            error!(error = %e, "failed to load analysis");
            surface.notify(t(lang, "load_failed"));
            Phase::Failed(e)
        }
    }
}
