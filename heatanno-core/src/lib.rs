//! heatanno Core Library
//!
//! Annotation tracks for complex heatmaps: categorical color strips, bar,
//! scatter, stacked bar, box and violin lanes aligned to heatmap rows or
//! columns. Tracks emit declarative chart traces and legend-only items; the
//! container reports the layout budget the tracks need and reorders all of
//! them together when the heatmap body is reordered.
//!
//! ```
//! use heatanno_core::{Axis, HeatmapAnnotation, Track, Which};
//!
//! let annotation = HeatmapAnnotation::builder(Which::Column)
//!     .values("species", vec!["A", "B", "A", "C"])
//!     .build()
//!     .unwrap();
//!
//! let traces = annotation.tracks()[0].to_traces(Axis::X, &[0.0, 1.0, 2.0, 3.0]).unwrap();
//! assert_eq!(traces.len(), 1);
//! assert_eq!(annotation.legend_items().len(), 3);
//! ```

pub mod annotation;
pub mod color;
pub mod config;
pub mod error;
pub mod factory;
pub mod trace;
pub mod track;
pub mod types;
mod util;

// Re-export commonly used types and functions
pub use annotation::{HeatmapAnnotation, HeatmapAnnotationBuilder, DEFAULT_GAP};
pub use color::{categorical_colorscale, generate_colors, ColorSpec, Colorscale, Palette};
pub use config::{AnnotationConfig, TrackConfig};
pub use error::{AnnotationError, AnnotationResult};
pub use factory::{build_track, from_spec, infer, infer_kind, TrackInput, TrackSpec};
pub use trace::{Orientation, Trace};
pub use track::{
    AnnotationTrack, BoxTrack, CategoricalTrack, NumericBarTrack, NumericScatterTrack,
    StackedBarTrack, Track, ViolinTrack,
};
pub use types::{Axis, TrackKind, Values, Which};

/// Version information for the heatanno core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
