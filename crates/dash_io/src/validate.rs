//! crates/dash_io/src/validate.rs
//!
//! Shape findings for a decoded report. Nothing here rejects a report: the
//! dashboard renders what it is given, and these findings are logged (or
//! turned into a non-zero exit by `--validate-only`).

use core::fmt;

use dash_core::{Report, ScenarioKey};

#[derive(Debug, Clone, PartialEq)]
pub enum Finding {
    /// A KPI card has no scenario to read from.
    MissingKpiScenario(ScenarioKey),
    /// A scenario has nothing to rank.
    EmptyRanking(ScenarioKey),
    /// No daily series; the time-series charts will be empty.
    EmptyDaily,
    /// A share outside [0,1]; `at` is a JSON pointer into the report.
    ShareOutOfRange { at: String, value: f64 },
    /// `unique_emails > submissions` on a day.
    UniqueExceedsSubmissions { date: String },
    /// A date equal to or earlier than its predecessor.
    DateOutOfOrder { date: String, previous: String },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::MissingKpiScenario(k) => write!(f, "missing KPI scenario {k}"),
            Finding::EmptyRanking(k) => write!(f, "scenario {k} has an empty ranking"),
            Finding::EmptyDaily => write!(f, "daily series is empty"),
            Finding::ShareOutOfRange { at, value } => write!(f, "share {value} outside [0,1] at {at}"),
            Finding::UniqueExceedsSubmissions { date } => {
                write!(f, "unique e-mails exceed submissions on {date}")
            }
            Finding::DateOutOfOrder { date, previous } => {
                write!(f, "date {date} does not follow {previous}")
            }
        }
    }
}

fn check_share(out: &mut Vec<Finding>, at: String, value: f64) {
    if !(0.0..=1.0).contains(&value) {
        out.push(Finding::ShareOutOfRange { at, value });
    }
}

/// Collect every finding, in report order.
pub fn validate_report(report: &Report, kpi_keys: &[ScenarioKey]) -> Vec<Finding> {
    let mut out = Vec::new();

    for key in kpi_keys {
        if report.scenario(key).is_none() {
            out.push(Finding::MissingKpiScenario(key.clone()));
        }
    }

    for (key, scenario) in &report.scenarios {
        if scenario.top.is_empty() {
            out.push(Finding::EmptyRanking(key.clone()));
        }
        for (i, entry) in scenario.top.iter().enumerate() {
            check_share(&mut out, format!("/scenarios/{key}/top/{i}/share"), entry.share);
        }
    }

    if report.daily.is_empty() {
        out.push(Finding::EmptyDaily);
    }
    let mut previous: Option<&str> = None;
    for (i, day) in report.daily.iter().enumerate() {
        check_share(&mut out, format!("/daily/{i}/mario_share"), day.mario_share);
        check_share(&mut out, format!("/daily/{i}/pattern_share"), day.pattern_share);
        if day.unique_emails > day.submissions {
            out.push(Finding::UniqueExceedsSubmissions { date: day.date.clone() });
        }
        if let Some(prev) = previous {
            // ISO dates order lexicographically
            if day.date.as_str() <= prev {
                out.push(Finding::DateOutOfOrder { date: day.date.clone(), previous: prev.to_string() });
            }
        }
        previous = Some(day.date.as_str());
    }

    out
}
