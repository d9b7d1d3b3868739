/*!
# Renderable Primitives

Declarative trace objects in the chart library's JSON shape. Tracks emit
these; the heatmap core inserts them into its figure as-is.
*/

use crate::color::Colorscale;
use crate::error::AnnotationResult;
use crate::types::Axis;
use serde::{Deserialize, Serialize};

/// Bar, box and violin orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "v")]
    Vertical,
    #[serde(rename = "h")]
    Horizontal,
}

impl Orientation {
    /// Items along x draw vertical glyphs, items along y horizontal ones
    pub fn for_axis(axis: Axis) -> Self {
        match axis {
            Axis::X => Orientation::Vertical,
            Axis::Y => Orientation::Horizontal,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

impl Marker {
    pub fn color<S: Into<String>>(color: S) -> Self {
        Self {
            color: Some(color.into()),
            size: None,
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }
}

/// Outline style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub color: String,
}

impl Line {
    pub fn color<S: Into<String>>(color: S) -> Self {
        Self { color: color.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendGroupTitle {
    pub text: String,
}

/// Heatmap-style trace used as a discrete color bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapTrace {
    pub name: String,
    pub z: Vec<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Vec<f64>>,
    pub customdata: Vec<Vec<String>>,
    pub colorscale: Colorscale,
    pub zmin: f64,
    pub zmax: f64,
    pub showscale: bool,
    pub xgap: f64,
    pub ygap: f64,
    pub hovertemplate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarTrace {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub orientation: Orientation,
    pub marker: Marker,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legendgroup: Option<String>,
    pub showlegend: bool,
    pub hovertemplate: String,
}

/// Scatter trace; `None` coordinates are gaps, as used by legend-only items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterTrace {
    pub name: String,
    pub x: Vec<Option<f64>>,
    pub y: Vec<Option<f64>>,
    pub mode: String,
    pub marker: Marker,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legendgroup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legendgrouptitle: Option<LegendGroupTitle>,
    pub showlegend: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxTrace {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub orientation: Orientation,
    pub width: f64,
    pub marker: Marker,
    pub legendgroup: String,
    pub showlegend: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViolinTrace {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub orientation: Orientation,
    pub width: f64,
    pub line: Line,
    pub fillcolor: String,
    pub legendgroup: String,
    pub showlegend: bool,
}

/// Any primitive a track can emit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Heatmap(HeatmapTrace),
    Bar(BarTrace),
    Scatter(ScatterTrace),
    Box(BoxTrace),
    Violin(ViolinTrace),
}

impl Trace {
    pub fn name(&self) -> &str {
        match self {
            Trace::Heatmap(t) => &t.name,
            Trace::Bar(t) => &t.name,
            Trace::Scatter(t) => &t.name,
            Trace::Box(t) => &t.name,
            Trace::Violin(t) => &t.name,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Trace::Heatmap(_) => "heatmap",
            Trace::Bar(_) => "bar",
            Trace::Scatter(_) => "scatter",
            Trace::Box(_) => "box",
            Trace::Violin(_) => "violin",
        }
    }

    pub fn showlegend(&self) -> bool {
        match self {
            Trace::Heatmap(_) => false,
            Trace::Bar(t) => t.showlegend,
            Trace::Scatter(t) => t.showlegend,
            Trace::Box(t) => t.showlegend,
            Trace::Violin(t) => t.showlegend,
        }
    }

    pub fn legendgroup(&self) -> Option<&str> {
        match self {
            Trace::Heatmap(_) => None,
            Trace::Bar(t) => t.legendgroup.as_deref(),
            Trace::Scatter(t) => t.legendgroup.as_deref(),
            Trace::Box(t) => Some(&t.legendgroup),
            Trace::Violin(t) => Some(&t.legendgroup),
        }
    }

    pub fn to_json(&self) -> AnnotationResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// A data-less marker trace that only contributes a legend row
pub(crate) fn legend_marker(name: &str, color: &str, group: &str) -> Trace {
    Trace::Scatter(ScatterTrace {
        name: name.to_string(),
        x: vec![None],
        y: vec![None],
        mode: "markers".to_string(),
        marker: Marker::color(color).with_size(10.0),
        legendgroup: Some(group.to_string()),
        legendgrouptitle: Some(LegendGroupTitle {
            text: group.to_string(),
        }),
        showlegend: true,
        hovertemplate: None,
    })
}
