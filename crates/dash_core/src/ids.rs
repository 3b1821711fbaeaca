//! crates/dash_core/src/ids.rs
//! Scenario keys and the fixed KPI scenario set.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors returned when validating or parsing keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdError {
    Empty,
    TooLong,
    Control,
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdError::Empty => write!(f, "empty key"),
            IdError::TooLong => write!(f, "key too long"),
            IdError::Control => write!(f, "key contains control characters"),
        }
    }
}

impl std::error::Error for IdError {}

const MAX_KEY_LEN: usize = 128;

/// Identifier of one analytical scenario (e.g. `A_regras_do_usuario`).
///
/// Keys come from the report's `scenarios` object, so any printable string is
/// accepted; the checks only reject values that cannot be a JSON object key
/// shown in a selection control. Deserialization runs the same checks.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct ScenarioKey(String);

impl ScenarioKey {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScenarioKey {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ScenarioKey {
    type Err = IdError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(IdError::Empty);
        }
        if s.len() > MAX_KEY_LEN {
            return Err(IdError::TooLong);
        }
        if s.chars().any(char::is_control) {
            return Err(IdError::Control);
        }
        Ok(ScenarioKey(s.to_owned()))
    }
}

impl TryFrom<&str> for ScenarioKey {
    type Error = IdError;
    #[inline]
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for ScenarioKey {
    type Error = IdError;
    #[inline]
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ScenarioKey> for String {
    #[inline]
    fn from(k: ScenarioKey) -> Self {
        k.0
    }
}

impl AsRef<str> for ScenarioKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The three scenarios whose totals feed the KPI cards, in card order.
///
/// A: organizer rules (excluded days + exact e-mail dedupe).
/// B: A minus the `nome.sobrenome###@gmail.com` pattern.
/// C: conservative variant.
pub const KPI_SCENARIOS: [&str; 3] = [
    "A_regras_do_usuario",
    "B_remove_padrao_nome_sobrenome_3dig_gmail",
    "C_conservador",
];

/// `KPI_SCENARIOS` as keys, in card order.
pub fn kpi_keys() -> Vec<ScenarioKey> {
    KPI_SCENARIOS.iter().map(|k| ScenarioKey((*k).to_owned())).collect()
}
