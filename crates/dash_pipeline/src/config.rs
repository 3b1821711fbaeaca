//! crates/dash_pipeline/src/config.rs
//! Typed dashboard settings. Defaults reproduce the published site.

use dash_core::{kpi_keys, ScenarioKey};
use dash_io::DEFAULT_REPORT_PATH;
use dash_report::{Lang, RankingOptions};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Report location relative to the source root.
    pub report_path: String,
    /// Scenarios shown on the KPI cards, in card order.
    pub kpi_keys: Vec<ScenarioKey>,
    /// Scenario selected at startup; `None` picks the first KPI scenario present.
    pub initial_scenario: Option<ScenarioKey>,
    pub ranking: RankingOptions,
    pub lang: Lang,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            report_path: DEFAULT_REPORT_PATH.to_owned(),
            kpi_keys: kpi_keys(),
            initial_scenario: None,
            ranking: RankingOptions::default(),
            lang: Lang::default(),
        }
    }
}

impl DashboardConfig {
    /// Use `lang` for both static labels and ranking hover text.
    pub fn with_lang(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self.ranking.lang = lang;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_site() {
        let c = DashboardConfig::default();
        assert_eq!(c.report_path, "data/analysis.json");
        assert_eq!(c.kpi_keys.len(), 3);
        assert_eq!(c.ranking.pie_limit, 8);
        assert!(!c.ranking.censor_names);
        assert_eq!(c.lang, Lang::PtBr);
        assert_eq!(c.with_lang(Lang::En).ranking.lang, Lang::En);
    }
}
