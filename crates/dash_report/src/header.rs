//! crates/dash_report/src/header.rs
//! Report title, generation time, methodology rules and digest footer.
//! Missing metadata is skipped; the page keeps its own defaults.

use dash_core::{Report, Rules};

use crate::i18n::{t, Lang};
use crate::surface::{targets, Row, Surface};

pub fn render_header<S: Surface + ?Sized>(
    report: &Report,
    digest: Option<&str>,
    lang: Lang,
    surface: &mut S,
) {
    let title = report.title.as_deref().unwrap_or(t(lang, "page_title"));
    surface.set_text(targets::REPORT_TITLE, title);

    if let Some(at) = report.generated_at.as_deref() {
        surface.set_text(targets::GENERATED_AT, at);
    }
    if let Some(rules) = &report.rules {
        surface.replace_table_body(targets::RULES_TABLE, rule_rows(rules, lang));
    }
    if let Some(d) = digest {
        surface.set_text(targets::REPORT_DIGEST, d);
    }
}

fn rule_rows(rules: &Rules, lang: Lang) -> Vec<Row> {
    let days = if rules.exclude_days.is_empty() {
        t(lang, "none").to_owned()
    } else {
        rules.exclude_days.join(", ")
    };
    let dedupe = t(lang, if rules.dedupe_email_exact { "yes" } else { "no" });

    let mut rows = vec![
        vec![t(lang, "excluded_days").to_owned(), days],
        vec![t(lang, "dedupe_exact").to_owned(), dedupe.to_owned()],
    ];
    rows.extend(rules.bot_patterns.iter().map(|p| {
        vec![format!("{} ({})", t(lang, "bot_pattern"), p.id), p.pattern.clone()]
    }));
    rows
}
