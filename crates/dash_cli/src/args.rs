// crates/dash_cli/src/args.rs
//
// CLI argument surface: raw clap types, post-parse validation, and the
// mapping into typed dashboard/export settings.
//
// Rules:
// - --source is a local directory or an http(s) base URL; other schemes are rejected
// - --report-path is relative to the source root
// - --scenario must be a valid scenario key (existence is checked after load)
// - --render [html|json]* chooses the export formats written next to --out

use std::path::PathBuf;

use clap::Parser;
use dash_core::ScenarioKey;
use dash_io::DEFAULT_REPORT_PATH;
use dash_pipeline::DashboardConfig;
use dash_report::Lang;
#[cfg(feature = "report-html")]
use dash_report::render_html::{ExportOptions, DEFAULT_PLOTLY_SRC};

#[cfg(not(feature = "report-html"))]
const DEFAULT_PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Parsed CLI arguments (raw).
#[derive(Debug, Parser, Clone)]
#[command(
    name = "dash",
    disable_help_subcommand = true,
    about = "Render the voting audit dashboard from analysis.json"
)]
pub struct Args {
    // --- Input ---
    /// Site root: a local directory or an http(s) base URL.
    #[arg(long, default_value = ".")]
    pub source: String,
    /// Report location relative to the site root.
    #[arg(long, default_value = DEFAULT_REPORT_PATH)]
    pub report_path: String,

    // --- Output & rendering ---
    /// Output file; JSON export uses the same stem with a `.json` extension.
    #[arg(long, default_value = "dashboard.html")]
    pub out: PathBuf,
    /// Export format(s): html, json.
    #[arg(long, value_parser = ["json", "html"], num_args = 1..=2, default_value = "html")]
    pub render: Vec<String>,
    /// Scenario selected when the page opens.
    #[arg(long)]
    pub scenario: Option<String>,
    /// Show candidate names censored.
    #[arg(long)]
    pub censor_names: bool,
    /// Language of static labels (pt-BR, en).
    #[arg(long, default_value = "pt-BR", value_parser = parse_lang)]
    pub lang: Lang,
    /// Plotly bundle referenced by the HTML export.
    #[arg(long, default_value = DEFAULT_PLOTLY_SRC)]
    pub plotly_src: String,

    // --- Control ---
    /// Load and check the report only; write nothing.
    #[arg(long)]
    pub validate_only: bool,
    /// Only log warnings and errors.
    #[arg(long)]
    pub quiet: bool,
    /// Emit logs as JSON lines.
    #[arg(long)]
    pub log_json: bool,
}

/// Where the report is fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    Dir(PathBuf),
    Http(String),
}

/// Errors surfaced by argument validation.
/// Keep messages short/stable (handy for scripts/tests).
#[derive(Debug)]
pub enum CliError {
    BadScheme(String),
    BadScenario(String),
    BadReportPath(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use CliError::*;
        match self {
            BadScheme(s) => write!(f, "source must be a directory or http(s) URL: {s}"),
            BadScenario(s) => write!(f, "invalid scenario key: {s}"),
            BadReportPath(s) => write!(f, "report path must be relative: {s}"),
        }
    }
}
impl std::error::Error for CliError {}

pub fn parse_lang(s: &str) -> Result<Lang, String> {
    s.parse()
}

fn scheme_of(s: &str) -> Option<&str> {
    s.split_once("://").map(|(scheme, _)| scheme)
}

impl Args {
    pub fn source_kind(&self) -> Result<SourceKind, CliError> {
        match scheme_of(self.source.trim()) {
            None => Ok(SourceKind::Dir(PathBuf::from(&self.source))),
            Some(s) if s.eq_ignore_ascii_case("http") || s.eq_ignore_ascii_case("https") => {
                Ok(SourceKind::Http(self.source.trim().to_owned()))
            }
            Some(_) => Err(CliError::BadScheme(self.source.clone())),
        }
    }

    pub fn scenario_key(&self) -> Result<Option<ScenarioKey>, CliError> {
        self.scenario
            .as_deref()
            .map(|s| s.parse().map_err(|_| CliError::BadScenario(s.to_owned())))
            .transpose()
    }

    pub fn dashboard_config(&self) -> Result<DashboardConfig, CliError> {
        let mut config = DashboardConfig {
            report_path: self.report_path.clone(),
            initial_scenario: self.scenario_key()?,
            ..DashboardConfig::default()
        }
        .with_lang(self.lang);
        config.ranking.censor_names = self.censor_names;
        Ok(config)
    }

    #[cfg(feature = "report-html")]
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions { plotly_src: self.plotly_src.clone(), lang: self.lang }
    }

    pub fn wants(&self, format: &str) -> bool {
        self.render.iter().any(|r| r == format)
    }

    /// Output path for `format`: `--out` for html, same stem `.json` for json.
    pub fn out_path(&self, format: &str) -> PathBuf {
        match format {
            "json" if self.out.extension().map_or(true, |e| e != "json") => self.out.with_extension("json"),
            _ => self.out.clone(),
        }
    }
}

/// Entry point used by main.rs
pub fn parse_and_validate() -> Result<Args, CliError> {
    validate(Args::parse())
}

fn validate(args: Args) -> Result<Args, CliError> {
    args.source_kind()?;
    args.scenario_key()?;
    let rel = args.report_path.trim();
    if rel.is_empty() || rel.starts_with('/') || rel.split('/').any(|seg| seg == "..") {
        return Err(CliError::BadReportPath(args.report_path.clone()));
    }
    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        let mut full = vec!["dash"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    #[test]
    fn defaults() {
        let a = parse(&[]);
        assert_eq!(a.source_kind().unwrap(), SourceKind::Dir(PathBuf::from(".")));
        assert_eq!(a.report_path, "data/analysis.json");
        assert_eq!(a.render, vec!["html"]);
        assert_eq!(a.lang, Lang::PtBr);
        let c = a.dashboard_config().unwrap();
        assert!(c.initial_scenario.is_none());
        assert!(!c.ranking.censor_names);
    }

    #[test]
    fn http_and_bad_schemes() {
        let a = parse(&["--source", "https://example.org/site/"]);
        assert_eq!(a.source_kind().unwrap(), SourceKind::Http("https://example.org/site/".into()));
        let a = parse(&["--source", "ftp://example.org"]);
        assert!(matches!(validate(a), Err(CliError::BadScheme(_))));
    }

    #[test]
    fn report_path_must_stay_inside_source() {
        for p in ["/etc/passwd", "../x.json", ""] {
            let a = parse(&["--report-path", p]);
            assert!(matches!(validate(a), Err(CliError::BadReportPath(_))), "{p}");
        }
    }

    #[test]
    fn options_flow_into_config() {
        let a = parse(&["--scenario", "C_conservador", "--censor-names", "--lang", "en"]);
        let c = a.dashboard_config().unwrap();
        assert_eq!(c.initial_scenario.unwrap().as_str(), "C_conservador");
        assert!(c.ranking.censor_names);
        assert_eq!(c.ranking.lang, Lang::En);
    }

    #[test]
    fn json_output_path_follows_out() {
        let a = parse(&["--out", "site/index.html", "--render", "html", "json"]);
        assert!(a.wants("html") && a.wants("json"));
        assert_eq!(a.out_path("html"), PathBuf::from("site/index.html"));
        assert_eq!(a.out_path("json"), PathBuf::from("site/index.json"));
    }

    #[test]
    fn unknown_lang_is_rejected_by_parser() {
        assert!(Args::try_parse_from(["dash", "--lang", "fr"]).is_err());
    }
}
