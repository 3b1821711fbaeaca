//! crates/dash_report/src/render_html.rs
//!
//! Static HTML export of a rendered `Page`.
//!
//! - Every text cell is HTML-escaped; numbers arrive pre-formatted.
//! - Figures are embedded as JSON and drawn by Plotly (`ExportOptions::plotly_src`).
//! - Each scenario's ranking is pre-rendered into its own `<section>`; a small
//!   inline script shows the one matching `<select id="scenario">`.
//! - A page with nothing rendered exports only its notifications.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use dash_core::format::NOT_A_NUMBER;

use crate::figure::Figure;
use crate::i18n::{t, Lang};
use crate::page::Page;
use crate::ranking::RankingPanel;
use crate::surface::{targets, Row};
use crate::ReportError;

pub const DEFAULT_PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub plotly_src: String,
    pub lang: Lang,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { plotly_src: DEFAULT_PLOTLY_SRC.to_owned(), lang: Lang::PtBr }
    }
}

// ------------------------- helpers -------------------------

/// Escape text for HTML.
fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// JSON safe to inline in a `<script>` element.
fn script_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, ReportError> {
    let json = serde_json::to_string(value).map_err(|e| ReportError::Render(e.to_string()))?;
    Ok(json.replace("</", "<\\/"))
}

// ------------------------- HTML builder -------------------------

pub struct HtmlBuilder {
    lang: Lang,
    buf: String,
    figures: BTreeMap<String, Figure>,
}

impl HtmlBuilder {
    pub fn new(lang: Lang) -> Self {
        Self { lang, buf: String::with_capacity(32 * 1024), figures: BTreeMap::new() }
    }

    pub fn start(&mut self, title: &str, plotly_src: &str) {
        let _ = write!(
            self.buf,
            "<!doctype html><html lang=\"{}\"><head><meta charset=\"utf-8\">\
             <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\
             <title>{}</title>\
             <script src=\"{}\"></script>\
             <style>\
             body{{font-family:system-ui,-apple-system,Segoe UI,Roboto,Ubuntu,Arial,sans-serif;margin:24px;background:#0f1115;color:#e6e6e6}}\
             h1,h2,h3{{margin:0.2em 0}}\
             .muted{{opacity:0.7}}\
             .grid{{display:grid;grid-template-columns:repeat(3,minmax(0,1fr));gap:12px}}\
             .card{{padding:12px;border-radius:8px;background:#1a1d24}}\
             .card b{{font-size:1.6em}}\
             .chart{{min-height:360px}}\
             table{{border-collapse:collapse;width:100%}}\
             td,th{{padding:4px 8px;border-bottom:1px solid #2a2e37;text-align:left}}\
             td.num{{text-align:right}}\
             .alert{{padding:12px;border-radius:8px;background:#5c1f1f}}\
             </style></head><body>",
            esc(self.lang.tag()),
            esc(title),
            esc(plotly_src)
        );
    }

    pub fn notifications(&mut self, messages: &[String]) {
        for m in messages {
            let _ = write!(self.buf, "<div class=\"alert\" role=\"alert\">{}</div>", esc(m));
        }
    }

    pub fn section_header(&mut self, title: &str, generated_at: Option<&str>) {
        let _ = write!(self.buf, "<h1 id=\"{}\">{}</h1>", targets::REPORT_TITLE, esc(title));
        if let Some(at) = generated_at {
            let _ = write!(
                self.buf,
                "<p class=\"muted\">{}: <span id=\"{}\">{}</span></p>",
                esc(t(self.lang, "generated_at")),
                targets::GENERATED_AT,
                esc(at)
            );
        }
    }

    pub fn section_kpis(&mut self, totals: [Option<&str>; 3]) {
        const LABELS: [&str; 3] = ["kpi_a", "kpi_b", "kpi_c"];
        self.buf.push_str("<div class=\"grid\">");
        for ((id, label), total) in targets::KPI_TOTALS.iter().zip(LABELS).zip(totals) {
            let _ = write!(
                self.buf,
                "<div class=\"card\"><div class=\"muted\">{}</div><b id=\"{}\">{}</b></div>",
                esc(t(self.lang, label)),
                id,
                esc(total.unwrap_or(NOT_A_NUMBER))
            );
        }
        self.buf.push_str("</div>");
    }

    pub fn scenario_select(&mut self, options: &[String], selected: &str) {
        let _ = write!(
            self.buf,
            "<h2>{}</h2><label>{} <select id=\"{}\">",
            esc(t(self.lang, "ranking")),
            esc(t(self.lang, "scenario")),
            targets::SCENARIO_SELECT
        );
        for o in options {
            let sel = if o == selected { " selected" } else { "" };
            let _ = write!(self.buf, "<option value=\"{0}\"{1}>{0}</option>", esc(o), sel);
        }
        self.buf.push_str("</select></label>");
    }

    /// One ranking view. The visible panel carries the canonical ids.
    pub fn ranking_section(&mut self, idx: usize, key: &str, rows: &[Row], figure: Option<&Figure>, visible: bool) {
        let (table_id, pie_id) = if visible {
            (targets::RANKING_TABLE.to_owned(), targets::PIE_SCENARIO.to_owned())
        } else {
            (format!("{}-{idx}", targets::RANKING_TABLE), format!("{}-{idx}", targets::PIE_SCENARIO))
        };
        let _ = write!(
            self.buf,
            "<section class=\"ranking\" data-scenario=\"{}\"{}>",
            esc(key),
            if visible { "" } else { " hidden" }
        );
        let _ = write!(
            self.buf,
            "<table id=\"{}\"><thead><tr><th>{}</th><th>{}</th><th>{}</th></tr></thead><tbody>",
            table_id,
            esc(t(self.lang, "col_name")),
            esc(t(self.lang, "col_votes")),
            esc(t(self.lang, "col_share"))
        );
        for row in rows {
            self.buf.push_str("<tr>");
            for (i, cell) in row.iter().enumerate() {
                let class = if i == 0 { "" } else { " class=\"num\"" };
                let _ = write!(self.buf, "<td{}>{}</td>", class, esc(cell));
            }
            self.buf.push_str("</tr>");
        }
        self.buf.push_str("</tbody></table>");
        if let Some(fig) = figure {
            self.chart(&pie_id, fig);
        }
        self.buf.push_str("</section>");
    }

    pub fn chart(&mut self, id: &str, figure: &Figure) {
        let _ = write!(self.buf, "<div class=\"chart\" id=\"{}\"></div>", esc(id));
        self.figures.insert(id.to_owned(), figure.clone());
    }

    pub fn titled_chart(&mut self, key: &'static str, id: &str, figure: Option<&Figure>) {
        if let Some(fig) = figure {
            let _ = write!(self.buf, "<h2>{}</h2>", esc(t(self.lang, key)));
            self.chart(id, fig);
        }
    }

    pub fn section_rules(&mut self, rows: &[Row]) {
        let _ = write!(
            self.buf,
            "<h2>{}</h2><table id=\"{}\"><thead><tr><th>{}</th><th>{}</th></tr></thead><tbody>",
            esc(t(self.lang, "methodology")),
            targets::RULES_TABLE,
            esc(t(self.lang, "rule")),
            esc(t(self.lang, "value"))
        );
        for row in rows {
            self.buf.push_str("<tr>");
            for cell in row {
                let _ = write!(self.buf, "<td><code>{}</code></td>", esc(cell));
            }
            self.buf.push_str("</tr>");
        }
        self.buf.push_str("</tbody></table>");
    }

    pub fn footer(&mut self, digest: &str) {
        let _ = write!(
            self.buf,
            "<footer class=\"muted\"><p>{}: <code id=\"{}\">{}</code></p></footer>",
            esc(t(self.lang, "digest")),
            targets::REPORT_DIGEST,
            esc(digest)
        );
    }

    /// Close the document, emitting the plotting script when figures exist.
    pub fn finish(mut self) -> Result<String, ReportError> {
        if !self.figures.is_empty() {
            let figs = script_json(&self.figures)?;
            let _ = write!(
                self.buf,
                "<script>\
                 const FIGS={figs};\
                 if(window.Plotly){{for(const[id,f]of Object.entries(FIGS)){{Plotly.newPlot(id,f.data,f.layout,f.config);}}}}\
                 const sel=document.getElementById(\"{select}\");\
                 if(sel){{sel.addEventListener(\"change\",function(e){{\
                 document.querySelectorAll(\"section.ranking\").forEach(function(s){{\
                 s.hidden=s.dataset.scenario!==e.target.value;\
                 const c=s.querySelector(\".chart\");\
                 if(!s.hidden&&c&&window.Plotly){{Plotly.Plots.resize(c);}}}});}});}}\
                 </script>",
                select = targets::SCENARIO_SELECT
            );
        }
        self.buf.push_str("</body></html>");
        Ok(self.buf)
    }
}

// ------------------------- top-level entry -------------------------

/// Render a page plus pre-rendered ranking panels as one static document.
///
/// Without panels, the page's own ranking table and pie are exported as the
/// only (selected) panel.
pub fn render_html(page: &Page, panels: &[RankingPanel], opts: &ExportOptions) -> Result<String, ReportError> {
    let title = page.text(targets::REPORT_TITLE).unwrap_or(t(opts.lang, "page_title"));
    let mut h = HtmlBuilder::new(opts.lang);
    h.start(title, &opts.plotly_src);
    h.notifications(&page.notifications);

    if page.is_blank() {
        return h.finish();
    }

    h.section_header(title, page.text(targets::GENERATED_AT));
    h.section_kpis(targets::KPI_TOTALS.map(|id| page.text(id)));

    if let Some(select) = page.select(targets::SCENARIO_SELECT) {
        h.scenario_select(&select.options, &select.selected);
        if panels.is_empty() {
            h.ranking_section(
                0,
                &select.selected,
                page.table(targets::RANKING_TABLE).unwrap_or_default(),
                page.chart(targets::PIE_SCENARIO),
                true,
            );
        } else {
            for (i, p) in panels.iter().enumerate() {
                let visible = p.key.as_str() == select.selected;
                h.ranking_section(i, p.key.as_str(), &p.rows, Some(&p.figure), visible);
            }
        }
    }

    h.titled_chart("daily_volume", targets::DAILY_VOLUME, page.chart(targets::DAILY_VOLUME));
    h.titled_chart("daily_shares", targets::DAILY_SHARES, page.chart(targets::DAILY_SHARES));

    if let Some(rows) = page.table(targets::RULES_TABLE) {
        h.section_rules(rows);
    }
    if let Some(d) = page.text(targets::REPORT_DIGEST) {
        h.footer(d);
    }
    h.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Surface;

    #[test]
    fn escapes_markup() {
        assert_eq!(esc("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#x27;");
    }

    #[test]
    fn script_json_cannot_close_the_script() {
        let s = script_json(&vec!["</script><b>"]).unwrap();
        assert!(!s.contains("</"));
    }

    #[test]
    fn blank_page_exports_only_notifications() {
        let mut page = Page::new();
        page.notify("Erro ao carregar");
        let html = render_html(&page, &[], &ExportOptions::default()).unwrap();
        assert!(html.contains("role=\"alert\">Erro ao carregar</div>"));
        assert!(!html.contains("kpiTotalA"));
        assert!(!html.contains("<table"));
        assert!(!html.contains("Plotly.newPlot"));
    }

    #[test]
    fn page_content_is_escaped_and_selected_panel_visible() {
        let mut page = Page::new();
        page.set_text("kpiTotalA", "1.234.567");
        page.bind_select(targets::SCENARIO_SELECT, vec!["A".into(), "B".into()], "A");
        page.replace_table_body(
            targets::RANKING_TABLE,
            vec![vec!["<script>".into(), "1".into(), "50,00%".into()]],
        );
        let html = render_html(&page, &[], &ExportOptions::default()).unwrap();
        assert!(html.starts_with("<!doctype html><html lang=\"pt-BR\">"));
        assert!(html.contains("<b id=\"kpiTotalA\">1.234.567</b>"));
        assert!(html.contains("<option value=\"A\" selected>A</option>"));
        assert!(html.contains("<td>&lt;script&gt;</td>"));
        assert!(html.contains("data-scenario=\"A\">"));
        assert!(html.ends_with("</body></html>"));
    }
}
