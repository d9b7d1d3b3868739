/*!
# Heatmap Annotation Container

An ordered set of tracks sharing one orientation. The container owns the
layout budget (`total_size`) the heatmap core reserves for its tracks and
keeps every track aligned when the heatmap's items are reordered.
*/

use crate::error::{AnnotationError, AnnotationResult};
use crate::factory::{build_track, TrackInput, TrackSpec};
use crate::trace::Trace;
use crate::track::{AnnotationTrack, Track};
use crate::types::{Axis, Values, Which};
use std::collections::HashSet;

/// Relative spacing between consecutive tracks
pub const DEFAULT_GAP: f64 = 0.005;

/// Immutable collection of annotation tracks for one side of a heatmap
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapAnnotation {
    which: Which,
    gap: f64,
    tracks: Vec<AnnotationTrack>,
}

impl HeatmapAnnotation {
    pub fn builder(which: Which) -> HeatmapAnnotationBuilder {
        HeatmapAnnotationBuilder::new(which)
    }

    /// Build one track per `(name, input)` entry, in order
    pub fn new<I, S, T>(which: Which, entries: I) -> AnnotationResult<Self>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<TrackInput>,
    {
        let tracks = entries
            .into_iter()
            .map(|(name, input)| build_track(name, input.into()))
            .collect::<AnnotationResult<Vec<_>>>()?;
        Self::from_tracks(which, DEFAULT_GAP, tracks)
    }

    /// Wrap already-built tracks; names must be unique
    pub fn from_tracks(which: Which, gap: f64, tracks: Vec<AnnotationTrack>) -> AnnotationResult<Self> {
        let mut seen = HashSet::new();
        for track in &tracks {
            if !seen.insert(track.name()) {
                return Err(AnnotationError::duplicate_track(track.name()));
            }
        }

        let annotation = Self { which, gap, tracks };
        let total = annotation.total_size();
        if total >= 1.0 {
            log::warn!(
                "Annotation tracks need {:.3} of the figure, leaving no room for the heatmap body",
                total
            );
        }
        Ok(annotation)
    }

    pub fn which(&self) -> Which {
        self.which
    }

    pub fn axis(&self) -> Axis {
        self.which.axis()
    }

    pub fn gap(&self) -> f64 {
        self.gap
    }

    /// Tracks in render order
    pub fn tracks(&self) -> &[AnnotationTrack] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.tracks.iter().map(|t| t.name()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&AnnotationTrack> {
        self.tracks.iter().find(|t| t.name() == name)
    }

    /// Share of the figure extent taken by all tracks plus the gaps between them
    pub fn total_size(&self) -> f64 {
        let sizes: f64 = self.tracks.iter().map(|t| t.size()).sum();
        sizes + self.gap * self.tracks.len().saturating_sub(1) as f64
    }

    /// Traces of every track, one group per track, along this container's axis
    pub fn track_traces(&self, positions: &[f64]) -> AnnotationResult<Vec<Vec<Trace>>> {
        let axis = self.axis();
        self.tracks
            .iter()
            .map(|t| t.to_traces(axis, positions))
            .collect()
    }

    /// Legend-only traces of every track, in track order
    pub fn legend_items(&self) -> Vec<Trace> {
        self.tracks.iter().flat_map(|t| t.legend_items()).collect()
    }

    /// New container with every track's items permuted by `order`.
    ///
    /// Orientation, gap, variants, sizes and per-track color identities are
    /// unchanged; `self` is left untouched.
    pub fn reorder(&self, order: &[usize]) -> AnnotationResult<Self> {
        let tracks = self
            .tracks
            .iter()
            .map(|t| t.reorder(order))
            .collect::<AnnotationResult<Vec<_>>>()?;
        Ok(Self {
            which: self.which,
            gap: self.gap,
            tracks,
        })
    }
}

/// Collects track entries and builds them together
#[derive(Debug, Clone)]
pub struct HeatmapAnnotationBuilder {
    which: Which,
    gap: f64,
    entries: Vec<(String, Entry)>,
}

#[derive(Debug, Clone)]
enum Entry {
    Input(TrackInput),
    Built(AnnotationTrack),
}

impl HeatmapAnnotationBuilder {
    pub fn new(which: Which) -> Self {
        Self {
            which,
            gap: DEFAULT_GAP,
            entries: Vec::new(),
        }
    }

    pub fn gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Raw values; the track kind is inferred
    pub fn values<S: Into<String>, V: Into<Values>>(mut self, name: S, values: V) -> Self {
        self.entries
            .push((name.into(), Entry::Input(TrackInput::Raw(values.into()))));
        self
    }

    /// Explicit track description
    pub fn spec<S: Into<String>>(mut self, name: S, spec: TrackSpec) -> Self {
        self.entries.push((name.into(), Entry::Input(TrackInput::Spec(spec))));
        self
    }

    /// A track built by the caller
    pub fn track<T: Into<AnnotationTrack>>(mut self, track: T) -> Self {
        let track = track.into();
        self.entries.push((track.name().to_string(), Entry::Built(track)));
        self
    }

    pub fn build(self) -> AnnotationResult<HeatmapAnnotation> {
        let tracks = self
            .entries
            .into_iter()
            .map(|(name, entry)| match entry {
                Entry::Input(input) => build_track(name, input),
                Entry::Built(track) => Ok(track),
            })
            .collect::<AnnotationResult<Vec<_>>>()?;
        HeatmapAnnotation::from_tracks(self.which, self.gap, tracks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::{BoxTrack, TrackKind};

    fn sample() -> HeatmapAnnotation {
        HeatmapAnnotation::builder(Which::Column)
            .gap(0.01)
            .values("group", vec!["b", "a", "b"])
            .values("depth", vec![10.5, 20.0, 5.25])
            .spec(
                "mix",
                TrackSpec::new(vec![vec![1.0, 0.0], vec![0.5, 0.5], vec![0.0, 1.0]])
                    .kind(TrackKind::StackedBar),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_keeps_declaration_order() {
        let annotation = sample();
        assert_eq!(annotation.names(), vec!["group", "depth", "mix"]);
        assert_eq!(annotation.axis(), Axis::X);
        assert_eq!(annotation.get("depth").map(|t| t.kind()), Some(TrackKind::Bar));
        assert!(annotation.get("missing").is_none());
    }

    #[test]
    fn test_total_size() {
        let annotation = sample();
        let expected = 0.025 + 0.06 + 0.08 + 0.01 * 2.0;
        assert!((annotation.total_size() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_empty_total_size() {
        let annotation = HeatmapAnnotation::builder(Which::Row).build().unwrap();
        assert!(annotation.is_empty());
        assert_eq!(annotation.total_size(), 0.0);
        assert!(annotation.legend_items().is_empty());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = HeatmapAnnotation::builder(Which::Column)
            .values("a", vec![1.0])
            .values("a", vec![2.0])
            .build()
            .unwrap_err();
        assert_eq!(err, AnnotationError::duplicate_track("a"));
    }

    #[test]
    fn test_construction_errors_propagate() {
        let err = HeatmapAnnotation::builder(Which::Column)
            .spec("mix", TrackSpec::new(vec![1.0, 2.0]).kind(TrackKind::StackedBar))
            .build()
            .unwrap_err();
        assert!(matches!(err, AnnotationError::Shape { .. }));
    }

    #[test]
    fn test_new_from_entries() {
        let annotation = HeatmapAnnotation::new(
            Which::Row,
            vec![
                ("x", TrackInput::from(Values::from(vec![1i64, 2, 1]))),
                ("y", TrackInput::from(TrackSpec::new(vec![0.1, 0.2, 0.3]))),
            ],
        )
        .unwrap();
        assert_eq!(annotation.gap(), DEFAULT_GAP);
        assert_eq!(annotation.tracks()[0].kind(), TrackKind::Categorical);
    }

    #[test]
    fn test_track_traces_and_legend() {
        let annotation = sample();
        let groups = annotation.track_traces(&[0.0, 1.0, 2.0]).unwrap();
        assert_eq!(groups.iter().map(Vec::len).collect::<Vec<_>>(), vec![1, 1, 2]);
        // two categories and two stack layers
        assert_eq!(annotation.legend_items().len(), 4);
    }

    #[test]
    fn test_track_traces_length_mismatch() {
        let err = sample().track_traces(&[0.0, 1.0]).unwrap_err();
        assert_eq!(err, AnnotationError::shape_mismatch("group", 3, 2));
    }

    #[test]
    fn test_reorder_is_a_new_value() {
        let annotation = sample();
        let reordered = annotation.reorder(&[1, 0, 2]).unwrap();
        assert_eq!(reordered.which(), annotation.which());
        assert_eq!(reordered.gap(), annotation.gap());
        assert_eq!(reordered.len(), annotation.len());

        let before = annotation.get("group").and_then(|t| t.as_categorical()).unwrap();
        let after = reordered.get("group").and_then(|t| t.as_categorical()).unwrap();
        assert_eq!(before.values(), ["b", "a", "b"]);
        assert_eq!(after.values(), ["a", "b", "b"]);
        assert_eq!(after.colors(), before.colors());
    }

    #[test]
    fn test_reorder_out_of_range() {
        assert!(matches!(
            sample().reorder(&[0, 3]),
            Err(AnnotationError::InvalidOrder { index: 3, .. })
        ));
    }

    #[test]
    fn test_prebuilt_track() {
        let annotation = HeatmapAnnotation::builder(Which::Row)
            .track(BoxTrack::new("dist", vec![vec![1.0, 2.0]]).unwrap().with_size(0.2))
            .build()
            .unwrap();
        assert_eq!(annotation.total_size(), 0.2);
    }
}
