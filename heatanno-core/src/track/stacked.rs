use super::Track;
use crate::color::{generate_colors, ColorSpec, Palette};
use crate::error::{AnnotationError, AnnotationResult};
use crate::trace::{legend_marker, BarTrace, Marker, Orientation, Trace};
use crate::types::{Axis, TrackKind, Values};
use crate::util::{check_positions, matrix_width, permute};

/// Item-by-layer values drawn as one bar trace per layer.
///
/// The bars only stack visually when the consuming figure uses
/// `barmode = "stack"`.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedBarTrack {
    name: String,
    values: Vec<Vec<f64>>,
    stack_names: Vec<String>,
    colors: Vec<String>,
    size: f64,
}

impl StackedBarTrack {
    /// Values must be a rectangular (n_items x n_stacks) matrix
    pub fn new<S: Into<String>, V: Into<Values>>(name: S, values: V) -> AnnotationResult<Self> {
        let name = name.into();
        let values = match values.into() {
            Values::Matrix(rows) => rows,
            other => {
                return Err(AnnotationError::shape(
                    &name,
                    format!("stacked bar values must be 2-D, got 1-D {}", other.dtype()),
                ));
            }
        };
        let n_stacks = matrix_width(&name, &values)?;
        Ok(Self {
            name,
            values,
            stack_names: (0..n_stacks).map(|i| format!("stack_{}", i)).collect(),
            colors: generate_colors(n_stacks, Palette::Auto),
            size: TrackKind::StackedBar.default_size(),
        })
    }

    pub fn with_stack_names<S: Into<String>>(mut self, names: Vec<S>) -> AnnotationResult<Self> {
        if names.len() != self.n_stacks() {
            return Err(AnnotationError::invalid_colors(
                &self.name,
                format!("{} stack names given for {} stacks", names.len(), self.n_stacks()),
            ));
        }
        self.stack_names = names.into_iter().map(Into::into).collect();
        Ok(self)
    }

    /// Explicit layer colors, positional or keyed by stack name
    pub fn with_colors(mut self, colors: &ColorSpec) -> AnnotationResult<Self> {
        self.colors = colors.resolve(&self.name, &self.stack_names)?;
        Ok(self)
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn n_stacks(&self) -> usize {
        self.stack_names.len()
    }

    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    pub fn stack_names(&self) -> &[String] {
        &self.stack_names
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Values of layer `stack` across all items
    pub fn layer(&self, stack: usize) -> Vec<f64> {
        self.values
            .iter()
            .map(|row| row.get(stack).copied().unwrap_or_default())
            .collect()
    }

    /// Layer names and colors are carried over unchanged
    pub fn reorder(&self, order: &[usize]) -> AnnotationResult<Self> {
        Ok(Self {
            name: self.name.clone(),
            values: permute(&self.name, &self.values, order)?,
            stack_names: self.stack_names.clone(),
            colors: self.colors.clone(),
            size: self.size,
        })
    }
}

impl Track for StackedBarTrack {
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
        TrackKind::StackedBar
    }

    fn to_traces(&self, axis: Axis, positions: &[f64]) -> AnnotationResult<Vec<Trace>> {
        check_positions(&self.name, self.values.len(), positions)?;

        let value_axis = axis.opposite();
        let traces = self
            .stack_names
            .iter()
            .zip(&self.colors)
            .enumerate()
            .map(|(j, (stack, color))| {
                let layer = self.layer(j);
                let (x, y) = match axis {
                    Axis::X => (positions.to_vec(), layer),
                    Axis::Y => (layer, positions.to_vec()),
                };
                Trace::Bar(BarTrace {
                    name: stack.clone(),
                    x,
                    y,
                    orientation: Orientation::for_axis(axis),
                    marker: Marker::color(color),
                    legendgroup: Some(self.name.clone()),
                    showlegend: false,
                    hovertemplate: format!(
                        "{} / {}: %{{{}:.2f}}<extra></extra>",
                        self.name, stack, value_axis
                    ),
                })
            })
            .collect();
        Ok(traces)
    }

    fn legend_items(&self) -> Vec<Trace> {
        self.stack_names
            .iter()
            .zip(&self.colors)
            .map(|(stack, color)| legend_marker(stack, color, &self.name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composition() -> StackedBarTrack {
        StackedBarTrack::new(
            "composition",
            vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]],
        )
        .unwrap()
    }

    #[test]
    fn test_one_dimensional_values_rejected() {
        let err = StackedBarTrack::new("mix", vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, AnnotationError::Shape { .. }));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        assert!(StackedBarTrack::new("mix", vec![vec![1.0, 2.0], vec![3.0]]).is_err());
    }

    #[test]
    fn test_default_stack_names() {
        let track = composition();
        assert_eq!(track.stack_names(), ["stack_0", "stack_1", "stack_2"]);
        assert_eq!(track.colors().len(), 3);
    }

    #[test]
    fn test_one_trace_and_legend_item_per_layer() {
        let track = composition().with_stack_names(vec!["T", "B", "NK"]).unwrap();
        let traces = track.to_traces(Axis::X, &[0.0, 1.0]).unwrap();
        assert_eq!(traces.len(), 3);
        assert_eq!(track.legend_items().len(), 3);

        let Trace::Bar(middle) = &traces[1] else {
            panic!("expected bar trace");
        };
        assert_eq!(middle.name, "B");
        assert_eq!(middle.y, vec![2.0, 5.0]);
        assert_eq!(middle.legendgroup.as_deref(), Some("composition"));
        assert!(!middle.showlegend);
        assert!(track.legend_items().iter().all(|t| t.showlegend()));
    }

    #[test]
    fn test_stack_names_length_checked() {
        let err = composition().with_stack_names(vec!["only"]).unwrap_err();
        assert!(matches!(err, AnnotationError::InvalidColors { .. }));
        assert_eq!(err.track(), Some("composition"));
    }

    #[test]
    fn test_colors_keyed_by_stack_name() {
        let mut map = std::collections::BTreeMap::new();
        map.insert("stack_2".to_string(), "black".to_string());
        let track = composition().with_colors(&ColorSpec::Map(map)).unwrap();
        assert_eq!(track.colors()[2], "black");
    }

    #[test]
    fn test_reorder_keeps_layers() {
        let track = composition()
            .with_colors(&ColorSpec::from(vec!["r", "g", "b"]))
            .unwrap();
        let reordered = track.reorder(&[1, 0]).unwrap();
        assert_eq!(reordered.values()[0], vec![4.0, 5.0, 6.0]);
        assert_eq!(reordered.colors(), track.colors());
        assert_eq!(reordered.stack_names(), track.stack_names());
    }
}
