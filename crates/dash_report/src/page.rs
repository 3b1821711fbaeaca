//! crates/dash_report/src/page.rs
//! In-memory `Surface`: the state a browser page would show, kept in
//! ordered maps so exports are stable.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::figure::Figure;
use crate::surface::{Row, SelectControl, Surface};

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Page {
    pub texts: BTreeMap<String, String>,
    pub tables: BTreeMap<String, Vec<Row>>,
    pub charts: BTreeMap<String, Figure>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub selects: BTreeMap<String, SelectControl>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notifications: Vec<String>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, target: &str) -> Option<&str> {
        self.texts.get(target).map(String::as_str)
    }

    pub fn table(&self, table: &str) -> Option<&[Row]> {
        self.tables.get(table).map(Vec::as_slice)
    }

    pub fn chart(&self, region: &str) -> Option<&Figure> {
        self.charts.get(region)
    }

    pub fn select(&self, control: &str) -> Option<&SelectControl> {
        self.selects.get(control)
    }

    /// A page that shows only notifications and nothing rendered.
    pub fn is_blank(&self) -> bool {
        self.texts.is_empty() && self.tables.is_empty() && self.charts.is_empty() && self.selects.is_empty()
    }
}

impl Surface for Page {
    fn set_text(&mut self, target: &str, text: &str) {
        self.texts.insert(target.to_owned(), text.to_owned());
    }

    fn replace_table_body(&mut self, table: &str, rows: Vec<Row>) {
        self.tables.insert(table.to_owned(), rows);
    }

    fn plot(&mut self, region: &str, figure: Figure) {
        self.charts.insert(region.to_owned(), figure);
    }

    fn bind_select(&mut self, control: &str, options: Vec<String>, selected: &str) {
        self.selects.insert(
            control.to_owned(),
            SelectControl { options, selected: selected.to_owned() },
        );
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_owned());
    }
}
