//! crates/dash_core/src/model.rs
//! In-memory shape of `analysis.json`, the finalized audit report.
//!
//! The model is read-only once constructed. Ordering is meaningful and is
//! never changed here: `top` is already ranked by the producer and `daily` is
//! already chronological. Unknown JSON fields are ignored.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ids::ScenarioKey;

/// The whole report artifact.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Report {
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub generated_at: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rules: Option<Rules>,
    pub scenarios: BTreeMap<ScenarioKey, ScenarioResult>,
    pub daily: Vec<DailyRecord>,
}

/// Filtering rules the producer applied (echoed for the methodology panel).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rules {
    #[cfg_attr(feature = "serde", serde(default))]
    pub exclude_days: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub dedupe_email_exact: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bot_patterns: Vec<BotPattern>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BotPattern {
    pub id: String,
    pub pattern: String,
}

/// Total and ranking for one scenario.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScenarioResult {
    pub total: u64,
    pub top: Vec<RankedEntry>,
}

/// One ranked candidate. `name` is not guaranteed unique.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RankedEntry {
    pub name: String,
    pub votes: u64,
    pub share: f64,
}

/// Aggregates for one calendar day.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DailyRecord {
    pub date: String,
    pub submissions: u64,
    pub unique_emails: u64,
    pub duplicates: u64,
    pub mario_share: f64,
    pub pattern_share: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mario_votes: Option<u64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pattern_votes: Option<u64>,
}

impl Report {
    /// Explicit lookup; absent keys are the caller's problem to report.
    #[inline]
    pub fn scenario(&self, key: &ScenarioKey) -> Option<&ScenarioResult> {
        self.scenarios.get(key)
    }

    /// Scenario keys in the order the selection control lists them.
    pub fn scenario_keys(&self) -> impl Iterator<Item = &ScenarioKey> {
        self.scenarios.keys()
    }

    /// Dates of `daily`, in report order.
    pub fn dates(&self) -> Vec<&str> {
        self.daily.iter().map(|d| d.date.as_str()).collect()
    }
}

impl ScenarioResult {
    /// The first `limit` entries (fewer when `top` is shorter).
    #[inline]
    pub fn head(&self, limit: usize) -> &[RankedEntry] {
        &self.top[..self.top.len().min(limit)]
    }
}
