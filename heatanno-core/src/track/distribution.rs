use super::Track;
use crate::color::{generate_colors, Palette};
use crate::error::{AnnotationError, AnnotationResult};
use crate::trace::{BoxTrace, Line, Marker, Orientation, Trace, ViolinTrace};
use crate::types::{Axis, TrackKind, Values};
use crate::util::{check_positions, permute, position_spacing, DISTRIBUTION_WIDTH_FACTOR};

fn observation_rows(name: &str, values: Values) -> AnnotationResult<Vec<Vec<f64>>> {
    match values {
        Values::Matrix(rows) => Ok(rows),
        other => Err(AnnotationError::shape(
            name,
            format!("distribution values must be 2-D, got 1-D {}", other.dtype()),
        )),
    }
}

/// Per-item glyph placement shared by box and violin tracks
struct Slot {
    x: Vec<f64>,
    y: Vec<f64>,
}

/// One slot per item; rows may hold different numbers of observations
fn slots(axis: Axis, positions: &[f64], rows: &[Vec<f64>]) -> Vec<Slot> {
    positions
        .iter()
        .zip(rows)
        .map(|(&pos, obs)| {
            let at = vec![pos; obs.len()];
            match axis {
                Axis::X => Slot { x: at, y: obs.clone() },
                Axis::Y => Slot { x: obs.clone(), y: at },
            }
        })
        .collect()
}

/// Glyph width keeping neighbouring distributions apart
fn glyph_width(positions: &[f64]) -> f64 {
    position_spacing(positions) * DISTRIBUTION_WIDTH_FACTOR
}

/// One box plot per item
#[derive(Debug, Clone, PartialEq)]
pub struct BoxTrack {
    name: String,
    values: Vec<Vec<f64>>,
    color: String,
    size: f64,
}

impl BoxTrack {
    pub fn new<S: Into<String>, V: Into<Values>>(name: S, values: V) -> AnnotationResult<Self> {
        let name = name.into();
        let values = observation_rows(&name, values.into())?;
        Ok(Self {
            name,
            values,
            color: generate_colors(1, Palette::Auto).remove(0),
            size: TrackKind::Box.default_size(),
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

    pub fn values(&self) -> &[Vec<f64>] {
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

impl Track for BoxTrack {
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
        TrackKind::Box
    }

    fn to_traces(&self, axis: Axis, positions: &[f64]) -> AnnotationResult<Vec<Trace>> {
        check_positions(&self.name, self.values.len(), positions)?;
        let width = glyph_width(positions);
        Ok(slots(axis, positions, &self.values)
            .into_iter()
            .map(|slot| {
                Trace::Box(BoxTrace {
                    name: self.name.clone(),
                    x: slot.x,
                    y: slot.y,
                    orientation: Orientation::for_axis(axis),
                    width,
                    marker: Marker::color(&self.color),
                    legendgroup: self.name.clone(),
                    showlegend: false,
                })
            })
            .collect())
    }
}

/// One violin per item
#[derive(Debug, Clone, PartialEq)]
pub struct ViolinTrack {
    name: String,
    values: Vec<Vec<f64>>,
    color: String,
    size: f64,
}

impl ViolinTrack {
    pub fn new<S: Into<String>, V: Into<Values>>(name: S, values: V) -> AnnotationResult<Self> {
        let name = name.into();
        let values = observation_rows(&name, values.into())?;
        Ok(Self {
            name,
            values,
            color: generate_colors(1, Palette::Auto).remove(0),
            size: TrackKind::Violin.default_size(),
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

    pub fn values(&self) -> &[Vec<f64>] {
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

impl Track for ViolinTrack {
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
        TrackKind::Violin
    }

    fn to_traces(&self, axis: Axis, positions: &[f64]) -> AnnotationResult<Vec<Trace>> {
        check_positions(&self.name, self.values.len(), positions)?;
        let width = glyph_width(positions);
        Ok(slots(axis, positions, &self.values)
            .into_iter()
            .map(|slot| {
                Trace::Violin(ViolinTrace {
                    name: self.name.clone(),
                    x: slot.x,
                    y: slot.y,
                    orientation: Orientation::for_axis(axis),
                    width,
                    line: Line::color(self.color.clone()),
                    fillcolor: self.color.clone(),
                    legendgroup: self.name.clone(),
                    showlegend: false,
                })
            })
            .collect())
    }
}
