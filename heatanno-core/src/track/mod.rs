//! Annotation tracks
//!
//! A track is one annotation lane aligned to heatmap rows or columns. The set
//! of variants is closed; [`AnnotationTrack`] is the sum type the container
//! stores, and every variant also implements [`Track`] on its own.

pub use crate::types::{Axis, TrackKind};

pub mod categorical;
pub mod distribution;
pub mod numeric;
pub mod stacked;

pub use categorical::CategoricalTrack;
pub use distribution::{BoxTrack, ViolinTrack};
pub use numeric::{NumericBarTrack, NumericScatterTrack};
pub use stacked::StackedBarTrack;

use crate::error::AnnotationResult;
use crate::trace::Trace;

/// Rendering contract shared by all track variants
pub trait Track {
    /// Trace name, hover prefix and legend group key
    fn name(&self) -> &str;

    /// Fraction of the figure extent this track consumes
    fn size(&self) -> f64;

    /// Number of annotated items (heatmap rows or columns)
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn kind(&self) -> TrackKind;

    /// Primitives drawing this track at `positions` along `axis`.
    ///
    /// Fails with a shape mismatch when `positions` does not have one entry
    /// per item.
    fn to_traces(&self, axis: Axis, positions: &[f64]) -> AnnotationResult<Vec<Trace>>;

    /// Legend-only primitives; most tracks have none
    fn legend_items(&self) -> Vec<Trace> {
        Vec::new()
    }
}

/// Any annotation track
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationTrack {
    Categorical(CategoricalTrack),
    Bar(NumericBarTrack),
    Scatter(NumericScatterTrack),
    StackedBar(StackedBarTrack),
    Box(BoxTrack),
    Violin(ViolinTrack),
}

macro_rules! each_variant {
    ($self:expr, $track:ident => $body:expr) => {
        match $self {
            AnnotationTrack::Categorical($track) => $body,
            AnnotationTrack::Bar($track) => $body,
            AnnotationTrack::Scatter($track) => $body,
            AnnotationTrack::StackedBar($track) => $body,
            AnnotationTrack::Box($track) => $body,
            AnnotationTrack::Violin($track) => $body,
        }
    };
}

impl AnnotationTrack {
    /// Same variant, same identity state, values permuted by `order`
    pub fn reorder(&self, order: &[usize]) -> AnnotationResult<Self> {
        Ok(match self {
            AnnotationTrack::Categorical(t) => AnnotationTrack::Categorical(t.reorder(order)?),
            AnnotationTrack::Bar(t) => AnnotationTrack::Bar(t.reorder(order)?),
            AnnotationTrack::Scatter(t) => AnnotationTrack::Scatter(t.reorder(order)?),
            AnnotationTrack::StackedBar(t) => AnnotationTrack::StackedBar(t.reorder(order)?),
            AnnotationTrack::Box(t) => AnnotationTrack::Box(t.reorder(order)?),
            AnnotationTrack::Violin(t) => AnnotationTrack::Violin(t.reorder(order)?),
        })
    }

    pub fn as_categorical(&self) -> Option<&CategoricalTrack> {
        match self {
            AnnotationTrack::Categorical(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_stacked_bar(&self) -> Option<&StackedBarTrack> {
        match self {
            AnnotationTrack::StackedBar(t) => Some(t),
            _ => None,
        }
    }
}

impl Track for AnnotationTrack {
    fn name(&self) -> &str {
        each_variant!(self, t => t.name())
    }

    fn size(&self) -> f64 {
        each_variant!(self, t => t.size())
    }

    fn len(&self) -> usize {
        each_variant!(self, t => t.len())
    }

    fn kind(&self) -> TrackKind {
        each_variant!(self, t => t.kind())
    }

    fn to_traces(&self, axis: Axis, positions: &[f64]) -> AnnotationResult<Vec<Trace>> {
        each_variant!(self, t => t.to_traces(axis, positions))
    }

    fn legend_items(&self) -> Vec<Trace> {
        each_variant!(self, t => t.legend_items())
    }
}

impl From<CategoricalTrack> for AnnotationTrack {
    fn from(track: CategoricalTrack) -> Self {
        AnnotationTrack::Categorical(track)
    }
}

impl From<NumericBarTrack> for AnnotationTrack {
    fn from(track: NumericBarTrack) -> Self {
        AnnotationTrack::Bar(track)
    }
}

impl From<NumericScatterTrack> for AnnotationTrack {
    fn from(track: NumericScatterTrack) -> Self {
        AnnotationTrack::Scatter(track)
    }
}

impl From<StackedBarTrack> for AnnotationTrack {
    fn from(track: StackedBarTrack) -> Self {
        AnnotationTrack::StackedBar(track)
    }
}

impl From<BoxTrack> for AnnotationTrack {
    fn from(track: BoxTrack) -> Self {
        AnnotationTrack::Box(track)
    }
}

impl From<ViolinTrack> for AnnotationTrack {
    fn from(track: ViolinTrack) -> Self {
        AnnotationTrack::Violin(track)
    }
}
