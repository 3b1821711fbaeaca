//! dash_core: Report model, scenario keys, and locale formatting.
//!
//! This crate is **I/O-free**. It defines the stable types used across the
//! dashboard (`dash_io`, `dash_report`, `dash_pipeline`, `dash_cli`).
//!
//! - Report model: `Report`, `ScenarioResult`, `RankedEntry`, `DailyRecord`
//! - Scenario keys and the three KPI scenarios
//! - pt-BR number formatting (integers, percentages)
//! - Candidate-name censoring for anonymized exports
//!
//! Serialization derives are gated behind the `serde` feature.

#![forbid(unsafe_code)]

pub mod censor;
pub mod format;
pub mod ids;
pub mod model;

pub use censor::censor_name;
pub use format::{format_integer, format_percent, NumberLocale, PT_BR};
pub use ids::{kpi_keys, IdError, ScenarioKey, KPI_SCENARIOS};
pub use model::{BotPattern, DailyRecord, RankedEntry, Report, Rules, ScenarioResult};
