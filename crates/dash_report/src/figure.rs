//! crates/dash_report/src/figure.rs
//! Plotly figure JSON (`data`, `layout`, `config`), limited to what the
//! dashboard draws: pies, bars, and line/marker scatters.
//! Optional fields are omitted from the JSON when unset.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
    pub config: PlotConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Pie(PieTrace),
    Bar(XyTrace),
    Scatter(XyTrace),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PieTrace {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
    pub textinfo: String,
    pub hovertemplate: String,
    /// Plotly sorts slices by value unless told otherwise.
    pub sort: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct XyTrace {
    pub name: String,
    pub x: Vec<String>,
    pub y: Series,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
}

/// Y values: raw counts or fractions.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Series {
    Counts(Vec<u64>),
    Fractions(Vec<f64>),
}

impl Series {
    pub fn len(&self) -> usize {
        match self {
            Series::Counts(v) => v.len(),
            Series::Fractions(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Trace {
    /// Number of plotted points (slices for a pie).
    pub fn points(&self) -> usize {
        match self {
            Trace::Pie(p) => p.values.len(),
            Trace::Bar(t) | Trace::Scatter(t) => t.y.len(),
        }
    }

    pub fn is_bar(&self) -> bool {
        matches!(self, Trace::Bar(_))
    }

    pub fn is_line(&self) -> bool {
        matches!(self, Trace::Scatter(_))
    }

    /// X labels for cartesian traces.
    pub fn x(&self) -> Option<&[String]> {
        match self {
            Trace::Pie(_) => None,
            Trace::Bar(t) | Trace::Scatter(t) => Some(&t.x),
        }
    }
}

impl Figure {
    pub fn bar_points(&self) -> usize {
        self.data.iter().filter(|t| t.is_bar()).map(Trace::points).sum()
    }

    pub fn line_points(&self) -> usize {
        self.data.iter().filter(|t| t.is_line()).map(Trace::points).sum()
    }
}

// ------------------------- layout -------------------------

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Layout {
    pub margin: Margin,
    pub paper_bgcolor: String,
    pub plot_bgcolor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis2: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

pub const TRANSPARENT: &str = "rgba(0,0,0,0)";
pub const FAINT_GRID: &str = "rgba(255,255,255,0.06)";
pub const NO_GRID: &str = "rgba(255,255,255,0)";

impl Layout {
    /// Transparent paper and plot area with the given margins.
    pub fn transparent(margin: Margin) -> Self {
        Self {
            margin,
            paper_bgcolor: TRANSPARENT.into(),
            plot_bgcolor: TRANSPARENT.into(),
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Margin {
    pub t: u32,
    pub r: u32,
    pub b: u32,
    pub l: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickangle: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickformat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showgrid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gridcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlaying: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
}

/// Date axis shared by both daily charts: angled labels, no vertical grid.
pub fn date_axis() -> Axis {
    Axis { tickangle: Some(-35), showgrid: Some(false), ..Axis::default() }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Legend {
    pub orientation: String,
    pub x: f64,
    pub y: f64,
}

/// Horizontal legend under the plot area.
pub fn legend_below() -> Legend {
    Legend { orientation: "h".into(), x: 0.0, y: -0.25 }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PlotConfig {
    #[serde(rename = "displayModeBar")]
    pub display_mode_bar: bool,
    pub responsive: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self { display_mode_bar: false, responsive: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    #[test]
    fn traces_are_tagged_and_optionals_omitted() {
        let fig = Figure {
            data: vec![Trace::Scatter(XyTrace {
                name: "s".into(),
                x: vec!["d1".into()],
                y: Series::Fractions(vec![0.5]),
                mode: Some("lines".into()),
                yaxis: None,
                text: None,
            })],
            layout: Layout::transparent(Margin { t: 10, r: 10, b: 10, l: 10 }),
            config: PlotConfig::default(),
        };
        assert_json_eq!(
            serde_json::to_value(&fig).unwrap(),
            json!({
                "data": [{ "type": "scatter", "name": "s", "x": ["d1"], "y": [0.5], "mode": "lines" }],
                "layout": {
                    "margin": { "t": 10, "r": 10, "b": 10, "l": 10 },
                    "paper_bgcolor": "rgba(0,0,0,0)",
                    "plot_bgcolor": "rgba(0,0,0,0)"
                },
                "config": { "displayModeBar": false, "responsive": true }
            })
        );
        assert_eq!(fig.line_points(), 1);
        assert_eq!(fig.bar_points(), 0);
    }
}
