use super::Track;
use crate::color::{generate_colors, Palette};
use crate::error::{AnnotationError, AnnotationResult};
use crate::trace::{BarTrace, Marker, Orientation, ScatterTrace, Trace};
use crate::types::{Axis, TrackKind, Values};
use crate::util::{check_positions, permute};

const DEFAULT_MARKER_SIZE: f64 = 6.0;

fn default_color() -> String {
    generate_colors(1, Palette::Auto).remove(0)
}

fn numeric_values(name: &str, values: Values) -> AnnotationResult<Vec<f64>> {
    values.as_f64().ok_or_else(|| {
        AnnotationError::shape(
            name,
            format!("expected 1-D numeric values, got {}", values.dtype()),
        )
    })
}

/// Hover template reporting the value axis to two decimals
fn value_hover(name: &str, axis: Axis) -> String {
    format!("{}: %{{{}:.2f}}<extra></extra>", name, axis.opposite())
}

/// Lay out `positions` along `axis` and `values` along the other one
fn along_axis<T: Clone>(axis: Axis, positions: Vec<T>, values: Vec<T>) -> (Vec<T>, Vec<T>) {
    match axis {
        Axis::X => (positions, values),
        Axis::Y => (values, positions),
    }
}

/// One bar per item, showing magnitude only
#[derive(Debug, Clone, PartialEq)]
pub struct NumericBarTrack {
    name: String,
    values: Vec<f64>,
    color: String,
    size: f64,
}

impl NumericBarTrack {
    pub fn new<S: Into<String>, V: Into<Values>>(name: S, values: V) -> AnnotationResult<Self> {
        let name = name.into();
        let values = numeric_values(&name, values.into())?;
        Ok(Self {
            name,
            values,
            color: default_color(),
            size: TrackKind::Bar.default_size(),
        })
    }

    pub fn with_color<S: Into<String>>(mut self, color: S) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn reorder(&self, order: &[usize]) -> AnnotationResult<Self> {
        Ok(Self {
            values: permute(&self.name, &self.values, order)?,
            ..self.clone()
        })
    }
}

impl Track for NumericBarTrack {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> f64 {
        self.size
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn kind(&self) -> TrackKind {
        TrackKind::Bar
    }

    fn to_traces(&self, axis: Axis, positions: &[f64]) -> AnnotationResult<Vec<Trace>> {
        check_positions(&self.name, self.values.len(), positions)?;
        let (x, y) = along_axis(axis, positions.to_vec(), self.values.clone());
        Ok(vec![Trace::Bar(BarTrace {
            name: self.name.clone(),
            x,
            y,
            orientation: Orientation::for_axis(axis),
            marker: Marker::color(&self.color),
            legendgroup: None,
            showlegend: false,
            hovertemplate: value_hover(&self.name, axis),
        })])
    }
}

/// One marker per item
#[derive(Debug, Clone, PartialEq)]
pub struct NumericScatterTrack {
    name: String,
    values: Vec<f64>,
    color: String,
    marker_size: f64,
    size: f64,
}

impl NumericScatterTrack {
    pub fn new<S: Into<String>, V: Into<Values>>(name: S, values: V) -> AnnotationResult<Self> {
        let name = name.into();
        let values = numeric_values(&name, values.into())?;
        Ok(Self {
            name,
            values,
            color: default_color(),
            marker_size: DEFAULT_MARKER_SIZE,
            size: TrackKind::Scatter.default_size(),
        })
    }

    pub fn with_color<S: Into<String>>(mut self, color: S) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_marker_size(mut self, marker_size: f64) -> Self {
        self.marker_size = marker_size;
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn marker_size(&self) -> f64 {
        self.marker_size
    }

    pub fn reorder(&self, order: &[usize]) -> AnnotationResult<Self> {
        Ok(Self {
            values: permute(&self.name, &self.values, order)?,
            ..self.clone()
        })
    }
}

impl Track for NumericScatterTrack {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> f64 {
        self.size
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn kind(&self) -> TrackKind {
        TrackKind::Scatter
    }

    fn to_traces(&self, axis: Axis, positions: &[f64]) -> AnnotationResult<Vec<Trace>> {
        check_positions(&self.name, self.values.len(), positions)?;
        let (x, y) = along_axis(
            axis,
            positions.iter().copied().map(Some).collect(),
            self.values.iter().copied().map(Some).collect(),
        );
        Ok(vec![Trace::Scatter(ScatterTrace {
            name: self.name.clone(),
            x,
            y,
            mode: "markers".to_string(),
            marker: Marker::color(&self.color).with_size(self.marker_size),
            legendgroup: None,
            legendgrouptitle: None,
            showlegend: false,
            hovertemplate: Some(value_hover(&self.name, axis)),
        })])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_column_axis() {
        let track = NumericBarTrack::new("count", vec![3.0, 1.5]).unwrap();
        let traces = track.to_traces(Axis::X, &[0.0, 1.0]).unwrap();
        let Trace::Bar(bar) = &traces[0] else {
            panic!("expected bar trace");
        };
        assert_eq!(bar.x, vec![0.0, 1.0]);
        assert_eq!(bar.y, vec![3.0, 1.5]);
        assert_eq!(bar.orientation, Orientation::Vertical);
        assert_eq!(bar.hovertemplate, "count: %{y:.2f}<extra></extra>");
        assert!(!bar.showlegend);
    }

    #[test]
    fn test_bar_row_axis_is_horizontal() {
        let track = NumericBarTrack::new("count", vec![3i64, 1]).unwrap();
        let traces = track.to_traces(Axis::Y, &[0.0, 1.0]).unwrap();
        let Trace::Bar(bar) = &traces[0] else {
            panic!("expected bar trace");
        };
        assert_eq!(bar.x, vec![3.0, 1.0]);
        assert_eq!(bar.y, vec![0.0, 1.0]);
        assert_eq!(bar.orientation, Orientation::Horizontal);
        assert_eq!(bar.hovertemplate, "count: %{x:.2f}<extra></extra>");
    }

    #[test]
    fn test_bar_rejects_text_and_matrix() {
        assert!(NumericBarTrack::new("t", vec!["a"]).is_err());
        assert!(NumericBarTrack::new("m", vec![vec![1.0, 2.0]]).is_err());
    }

    #[test]
    fn test_scatter_marker_options() {
        let track = NumericScatterTrack::new("score", vec![0.5, 0.25])
            .unwrap()
            .with_color("#000000")
            .with_marker_size(9.0);
        let traces = track.to_traces(Axis::X, &[0.0, 1.0]).unwrap();
        let Trace::Scatter(scatter) = &traces[0] else {
            panic!("expected scatter trace");
        };
        assert_eq!(scatter.y, vec![Some(0.5), Some(0.25)]);
        assert_eq!(scatter.mode, "markers");
        assert_eq!(scatter.marker.size, Some(9.0));
        assert_eq!(scatter.marker.color.as_deref(), Some("#000000"));
        assert!(track.legend_items().is_empty());
    }

    #[test]
    fn test_reorder_permutes_values_only() {
        let track = NumericBarTrack::new("count", vec![1.0, 2.0, 3.0])
            .unwrap()
            .with_color("red");
        let reordered = track.reorder(&[2, 0, 1]).unwrap();
        assert_eq!(reordered.values(), [3.0, 1.0, 2.0]);
        assert_eq!(reordered.color(), "red");
        assert_eq!(track.values(), [1.0, 2.0, 3.0]);
    }
}
