//! crates/dash_report/src/kpi.rs
//! KPI cards: one formatted scenario total per card.

use dash_core::{format_integer, Report, ScenarioKey};
use tracing::debug;

use crate::surface::{targets, Surface};
use crate::ReportError;

/// Write the totals of `keys` (card order A, B, C) to the KPI targets.
///
/// Every key is resolved before anything is written, so a missing scenario
/// leaves the cards untouched.
pub fn render_kpis<S: Surface + ?Sized>(
    report: &Report,
    keys: &[ScenarioKey],
    surface: &mut S,
) -> Result<(), ReportError> {
    let totals = keys
        .iter()
        .map(|k| {
            report
                .scenario(k)
                .map(|s| s.total)
                .ok_or_else(|| ReportError::UnknownScenario(k.clone()))
        })
        .collect::<Result<Vec<u64>, _>>()?;

    for (target, total) in targets::KPI_TOTALS.iter().zip(totals) {
        surface.set_text(target, &format_integer(total));
    }
    debug!(cards = keys.len().min(targets::KPI_TOTALS.len()), "kpis rendered");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Page;
    use dash_core::{kpi_keys, ScenarioResult};

    fn report_with(totals: &[(&str, u64)]) -> Report {
        let mut r = Report::default();
        for (k, total) in totals {
            r.scenarios.insert(k.parse().unwrap(), ScenarioResult { total: *total, top: vec![] });
        }
        r
    }

    #[test]
    fn writes_formatted_totals_in_card_order() {
        let r = report_with(&[
            ("A_regras_do_usuario", 1_234_567),
            ("B_remove_padrao_nome_sobrenome_3dig_gmail", 701_234),
            ("C_conservador", 999),
        ]);
        let mut page = Page::new();
        render_kpis(&r, &kpi_keys(), &mut page).unwrap();
        assert_eq!(page.text("kpiTotalA"), Some("1.234.567"));
        assert_eq!(page.text("kpiTotalB"), Some("701.234"));
        assert_eq!(page.text("kpiTotalC"), Some("999"));
    }

    #[test]
    fn missing_scenario_writes_nothing() {
        let r = report_with(&[("A_regras_do_usuario", 1), ("C_conservador", 3)]);
        let mut page = Page::new();
        let err = render_kpis(&r, &kpi_keys(), &mut page).unwrap_err();
        assert!(matches!(
            err,
            ReportError::UnknownScenario(ref k) if k.as_str() == "B_remove_padrao_nome_sobrenome_3dig_gmail"
        ));
        assert!(page.is_blank());
    }
}
