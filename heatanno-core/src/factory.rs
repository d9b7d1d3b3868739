//! Track factory
//!
//! Turns raw values or an explicit track description into an
//! [`AnnotationTrack`]. Raw values go through type inference; descriptions
//! dispatch on their `type` tag and fall back to inference when the tag is
//! missing or unknown.

pub use crate::color::ColorSpec;

use crate::error::AnnotationResult;
use crate::track::{
    AnnotationTrack, BoxTrack, CategoricalTrack, NumericBarTrack, NumericScatterTrack,
    StackedBarTrack, ViolinTrack,
};
use crate::types::{TrackKind, Values};
use crate::util::distinct_sorted;
use serde::{Deserialize, Serialize};

/// Integer values with at most this many distinct values are categorical
pub const MAX_INTEGER_CATEGORIES: usize = 10;

/// Explicit description of one track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackSpec {
    pub values: Values,

    /// Variant tag; unknown tags are kept so they can fall back to inference
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Categorical and stacked bar tracks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorSpec>,

    /// Single-series tracks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_names: Option<Vec<String>>,

    /// Overrides the variant's default size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker_size: Option<f64>,
}

impl TrackSpec {
    pub fn new<V: Into<Values>>(values: V) -> Self {
        Self {
            values: values.into(),
            kind: None,
            colors: None,
            color: None,
            stack_names: None,
            size: None,
            marker_size: None,
        }
    }

    pub fn kind(mut self, kind: TrackKind) -> Self {
        self.kind = Some(kind.as_str().to_string());
        self
    }

    /// Raw tag, as it would arrive from a configuration document
    pub fn kind_tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.kind = Some(tag.into());
        self
    }

    pub fn colors<C: Into<ColorSpec>>(mut self, colors: C) -> Self {
        self.colors = Some(colors.into());
        self
    }

    pub fn color<S: Into<String>>(mut self, color: S) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn stack_names<S: Into<String>>(mut self, names: Vec<S>) -> Self {
        self.stack_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn marker_size(mut self, marker_size: f64) -> Self {
        self.marker_size = Some(marker_size);
        self
    }
}

/// What a caller can hand the container for one track
#[derive(Debug, Clone, PartialEq)]
pub enum TrackInput {
    Raw(Values),
    Spec(TrackSpec),
}

impl From<Values> for TrackInput {
    fn from(values: Values) -> Self {
        TrackInput::Raw(values)
    }
}

impl From<TrackSpec> for TrackInput {
    fn from(spec: TrackSpec) -> Self {
        TrackInput::Spec(spec)
    }
}

/// Kind chosen for raw values: text, and integers with few distinct values,
/// are categorical; everything else is a bar track.
pub fn infer_kind(values: &Values) -> TrackKind {
    match values {
        Values::Text(_) => TrackKind::Categorical,
        Values::Integer(v) if distinct_sorted(v).len() <= MAX_INTEGER_CATEGORIES => {
            TrackKind::Categorical
        }
        _ => TrackKind::Bar,
    }
}

/// Build a track from raw values by inference
pub fn infer<S: Into<String>>(name: S, values: Values) -> AnnotationResult<AnnotationTrack> {
    let name = name.into();
    let kind = infer_kind(&values);
    log::debug!("Inferred {} track for '{}' from {} values", kind, name, values.dtype());
    build(name, kind, TrackSpec::new(values))
}

/// Build a track from an explicit description
pub fn from_spec<S: Into<String>>(name: S, spec: TrackSpec) -> AnnotationResult<AnnotationTrack> {
    let name = name.into();
    let kind = match spec.kind.as_deref().map(|tag| (tag, TrackKind::parse(tag))) {
        Some((_, Some(kind))) => kind,
        Some((tag, None)) => {
            let kind = infer_kind(&spec.values);
            log::debug!("Unknown track type '{}' for '{}', inferred {}", tag, name, kind);
            kind
        }
        None => infer_kind(&spec.values),
    };
    build(name, kind, spec)
}

/// Build a track from either input form
pub fn build_track<S: Into<String>>(name: S, input: TrackInput) -> AnnotationResult<AnnotationTrack> {
    match input {
        TrackInput::Raw(values) => infer(name, values),
        TrackInput::Spec(spec) => from_spec(name, spec),
    }
}

fn build(name: String, kind: TrackKind, spec: TrackSpec) -> AnnotationResult<AnnotationTrack> {
    let size = spec.size.unwrap_or_else(|| kind.default_size());
    let track: AnnotationTrack = match kind {
        TrackKind::Categorical => {
            let mut track = CategoricalTrack::new(name, spec.values)?;
            if let Some(colors) = &spec.colors {
                track = track.with_colors(colors)?;
            }
            track.with_size(size).into()
        }
        TrackKind::Bar => {
            let mut track = NumericBarTrack::new(name, spec.values)?;
            if let Some(color) = spec.color {
                track = track.with_color(color);
            }
            track.with_size(size).into()
        }
        TrackKind::Scatter => {
            let mut track = NumericScatterTrack::new(name, spec.values)?;
            if let Some(color) = spec.color {
                track = track.with_color(color);
            }
            if let Some(marker_size) = spec.marker_size {
                track = track.with_marker_size(marker_size);
            }
            track.with_size(size).into()
        }
        TrackKind::StackedBar => {
            let mut track = StackedBarTrack::new(name, spec.values)?;
            if let Some(names) = spec.stack_names {
                track = track.with_stack_names(names)?;
            }
            if let Some(colors) = &spec.colors {
                track = track.with_colors(colors)?;
            }
            track.with_size(size).into()
        }
        TrackKind::Box => {
            let mut track = BoxTrack::new(name, spec.values)?;
            if let Some(color) = spec.color {
                track = track.with_color(color);
            }
            track.with_size(size).into()
        }
        TrackKind::Violin => {
            let mut track = ViolinTrack::new(name, spec.values)?;
            if let Some(color) = spec.color {
                track = track.with_color(color);
            }
            track.with_size(size).into()
        }
    };
    Ok(track)
}
