// crates/dash_cli/src/main.rs
//
// Wires up exit codes, typed error mapping, CLI parsing, logging, the
// validate-only short-circuit, and the full run path
// (source → load → render page → export html/json).

mod args;

mod exitcodes {
    pub const OK: i32 = 0;
    /// Bad arguments, unparseable or schema-invalid report, unknown scenario.
    pub const VALIDATION: i32 = 2;
    /// Report unavailable (unreachable source, non-success status).
    pub const LOAD: i32 = 3;
    pub const IO: i32 = 4;
    pub const RENDER: i32 = 5;
}

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use args::{parse_and_validate as parse_cli, Args, SourceKind};

use dash_io::{hasher, validate_report, DirSource, HttpSource, LoadError, ReportLoader, ReportSource};
use dash_pipeline::{fetch_report, start, DashboardConfig, Phase, PipelineError};
use dash_report::{Page, RankingPanel, ReportError};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    Validation(String),
    Load(String),
    Io(String),
    Render(String),
}

impl std::fmt::Display for MainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MainError::Validation(m) => write!(f, "validation: {m}"),
            MainError::Load(m) => write!(f, "load: {m}"),
            MainError::Io(m) => write!(f, "io: {m}"),
            MainError::Render(m) => write!(f, "render: {m}"),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match parse_cli() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("dash: error: {e}");
            return ExitCode::from(exitcodes::VALIDATION as u8);
        }
    };
    init_tracing(args.quiet, args.log_json);

    let outcome = if args.validate_only { validate_only(&args).await } else { run_once(&args).await };
    let rc = match outcome {
        Ok(()) => exitcodes::OK,
        Err(e) => {
            error!(error = %e, "dash failed");
            map_error(&e)
        }
    };
    ExitCode::from(rc as u8)
}

/// Logs go to stderr; `RUST_LOG` overrides the default level.
fn init_tracing(quiet: bool, log_json: bool) {
    let default = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn map_error(e: &MainError) -> i32 {
    use exitcodes::*;
    match e {
        MainError::Validation(_) => VALIDATION,
        MainError::Load(_) => LOAD,
        MainError::Io(_) => IO,
        MainError::Render(_) => RENDER,
    }
}

fn map_load_err(e: LoadError) -> MainError {
    match e {
        LoadError::Unreachable { .. } | LoadError::Status { .. } => MainError::Load(e.to_string()),
        LoadError::Parse(_) | LoadError::Schema { .. } | LoadError::Source(_) => {
            MainError::Validation(e.to_string())
        }
    }
}

fn map_report_err(e: ReportError) -> MainError {
    match e {
        ReportError::UnknownScenario(_) => MainError::Validation(e.to_string()),
        ReportError::Render(_) => MainError::Render(e.to_string()),
    }
}

fn map_pipeline_err(e: PipelineError) -> MainError {
    match e {
        PipelineError::Load(e) => map_load_err(e),
        PipelineError::Render(e) => map_report_err(e),
    }
}

fn build_loader(args: &Args, config: &DashboardConfig) -> Result<ReportLoader, MainError> {
    let source: Box<dyn ReportSource> = match args.source_kind().map_err(|e| MainError::Validation(e.to_string()))? {
        SourceKind::Dir(root) => Box::new(DirSource::new(root)),
        SourceKind::Http(base) => Box::new(HttpSource::new(&base).map_err(map_load_err)?),
    };
    Ok(ReportLoader::with_path(source, config.report_path.clone()))
}

/// Load + schema check + shape findings; nothing is rendered or written.
async fn validate_only(args: &Args) -> Result<(), MainError> {
    let config = args.dashboard_config().map_err(|e| MainError::Validation(e.to_string()))?;
    let loader = build_loader(args, &config)?;
    let loaded = fetch_report(&loader).await.map_err(map_load_err)?;

    let findings = validate_report(&loaded.report, &config.kpi_keys);
    for f in &findings {
        warn!(finding = %f, "report finding");
    }
    if let Some(k) = &config.initial_scenario {
        if loaded.report.scenario(k).is_none() {
            return Err(map_report_err(ReportError::UnknownScenario(k.clone())));
        }
    }
    if !findings.is_empty() {
        return Err(MainError::Validation(format!("{} report finding(s)", findings.len())));
    }
    let digest = loaded.digest.as_deref().map(|d| hasher::short(d, 12)).unwrap_or("-");
    info!(digest, "validate-only: report OK");
    Ok(())
}

async fn run_once(args: &Args) -> Result<(), MainError> {
    let config = args.dashboard_config().map_err(|e| MainError::Validation(e.to_string()))?;
    let loader = build_loader(args, &config)?;

    let mut page = Page::new();
    match start(&loader, &mut page, config).await {
        Phase::Ready(dashboard) => {
            let panels = dashboard.ranking_panels().map_err(map_report_err)?;
            export(args, &page, &panels)
        }
        Phase::Failed(e) => {
            // A failed page exports only its notification; the startup error decides the exit code.
            if let Err(export_err) = export(args, &page, &[]) {
                warn!(error = %export_err, "notice page not written");
            }
            Err(map_pipeline_err(e))
        }
        Phase::Loading => Err(MainError::Load("startup did not complete".into())),
    }
}

fn export(args: &Args, page: &Page, panels: &[RankingPanel]) -> Result<(), MainError> {
    for fmt in &args.render {
        match fmt.as_str() {
            "html" => export_html(args, page, panels)?,
            "json" => export_json(args, page, panels)?,
            other => return Err(MainError::Render(format!("unknown renderer: {other}"))),
        }
    }
    Ok(())
}

fn export_html(args: &Args, page: &Page, panels: &[RankingPanel]) -> Result<(), MainError> {
    #[cfg(feature = "report-html")]
    {
        let html = dash_report::render_html(page, panels, &args.export_options()).map_err(map_report_err)?;
        write_file(&args.out_path("html"), &html)
    }
    #[cfg(not(feature = "report-html"))]
    {
        let _ = (args, page, panels);
        Err(MainError::Render("html renderer not enabled (build with feature `report-html`)".into()))
    }
}

fn export_json(args: &Args, page: &Page, panels: &[RankingPanel]) -> Result<(), MainError> {
    #[cfg(feature = "report-json")]
    {
        let json = dash_report::render_json(page, panels).map_err(map_report_err)?;
        write_file(&args.out_path("json"), &json)
    }
    #[cfg(not(feature = "report-json"))]
    {
        let _ = (args, page, panels);
        Err(MainError::Render("json renderer not enabled (build with feature `report-json`)".into()))
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), MainError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| MainError::Io(format!("mkdir {}: {e}", parent.display())))?;
    }
    fs::write(path, contents).map_err(|e| MainError::Io(format!("write {}: {e}", path.display())))?;
    info!(path = %path.display(), bytes = contents.len(), "wrote export");
    Ok(())
}
