//! Configuration handling for annotation layouts
//!
//! An annotation can be described in a TOML (or JSON) document with one
//! `[[track]]` table per track, in render order.

use crate::annotation::{HeatmapAnnotation, DEFAULT_GAP};
use crate::error::AnnotationResult;
use crate::factory::{from_spec, TrackSpec};
use crate::types::{TrackKind, Values, Which};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationConfig {
    /// Whether the tracks annotate columns or rows
    #[serde(default)]
    pub which: Which,

    /// Relative spacing between consecutive tracks
    #[serde(default = "default_gap")]
    pub gap: f64,

    #[serde(default, rename = "track")]
    pub tracks: Vec<TrackConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackConfig {
    pub name: String,

    #[serde(flatten)]
    pub spec: TrackSpec,
}

fn default_gap() -> f64 { DEFAULT_GAP }

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            which: Which::default(),
            gap: default_gap(),
            tracks: Vec::new(),
        }
    }
}

impl AnnotationConfig {
    /// Load a configuration file; `.json` files are read as JSON, anything
    /// else as TOML
    pub fn load_from_file(path: &Path) -> Result<Self> {
        log::info!("Loading annotation configuration from: {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .map_or(false, |e| e.eq_ignore_ascii_case("json"));
        let config = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        };

        config.with_context(|| format!("Failed to parse configuration file: {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> AnnotationResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> AnnotationResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> AnnotationResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = self
            .to_toml_string()
            .context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write configuration file: {}", path.display()))?;

        Ok(())
    }

    /// Build the annotation this configuration describes
    pub fn build(&self) -> AnnotationResult<HeatmapAnnotation> {
        let tracks = self
            .tracks
            .iter()
            .map(|t| from_spec(t.name.clone(), t.spec.clone()))
            .collect::<AnnotationResult<Vec<_>>>()?;
        HeatmapAnnotation::from_tracks(self.which, self.gap, tracks)
    }

    /// Generate example configuration file content
    pub fn example_toml() -> AnnotationResult<String> {
        let config = Self {
            which: Which::Column,
            gap: default_gap(),
            tracks: vec![
                TrackConfig {
                    name: "tissue".to_string(),
                    spec: TrackSpec::new(vec!["liver", "lung", "liver", "brain"])
                        .kind(TrackKind::Categorical),
                },
                TrackConfig {
                    name: "reads".to_string(),
                    spec: TrackSpec::new(Values::Float(vec![1.2e6, 8.4e5, 2.1e6, 9.9e5]))
                        .kind(TrackKind::Bar)
                        .color("#4c72b0"),
                },
                TrackConfig {
                    name: "composition".to_string(),
                    spec: TrackSpec::new(vec![
                        vec![0.6, 0.4],
                        vec![0.3, 0.7],
                        vec![0.5, 0.5],
                        vec![0.9, 0.1],
                    ])
                    .kind(TrackKind::StackedBar)
                    .stack_names(vec!["tumor", "stroma"]),
                },
            ],
        };
        config.to_toml_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::Track;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r##"
which = "row"
gap = 0.02

[[track]]
name = "condition"
values = ["ctrl", "treated", "ctrl"]
colors = { ctrl = "#999999", treated = "#d62728" }

[[track]]
name = "expression"
type = "scatter"
values = [0.5, 1.5, 2.5]
marker_size = 4.0

[[track]]
name = "replicates"
type = "violin"
values = [[1.0, 2.0], [2.0, 3.0], [3.0, 4.0]]
size = 0.1
"##;

    #[test]
    fn test_default_config() {
        let config = AnnotationConfig::default();
        assert_eq!(config.which, Which::Column);
        assert_eq!(config.gap, DEFAULT_GAP);
        assert!(config.tracks.is_empty());
    }

    #[test]
    fn test_parse_toml() {
        let config = AnnotationConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.which, Which::Row);
        assert_eq!(config.tracks.len(), 3);
        assert_eq!(config.tracks[1].spec.kind.as_deref(), Some("scatter"));

        let annotation = config.build().unwrap();
        assert_eq!(annotation.names(), vec!["condition", "expression", "replicates"]);
        let condition = annotation.tracks()[0].as_categorical().unwrap();
        assert_eq!(condition.color_of("treated"), Some("#d62728"));
        assert_eq!(annotation.tracks()[2].size(), 0.1);
    }

    #[test]
    fn test_unknown_type_is_not_a_parse_error() {
        let config = AnnotationConfig::from_toml_str(
            "[[track]]\nname = \"n\"\ntype = \"ribbon\"\nvalues = [1.5, 2.5]\n",
        )
        .unwrap();
        let annotation = config.build().unwrap();
        assert_eq!(annotation.tracks()[0].kind(), TrackKind::Bar);
    }

    #[test]
    fn test_config_roundtrip() -> Result<()> {
        let config = AnnotationConfig::from_toml_str(SAMPLE)?;
        let temp_file = NamedTempFile::new()?;

        config.save_to_file(temp_file.path())?;
        let loaded = AnnotationConfig::load_from_file(temp_file.path())?;

        assert_eq!(loaded.which, config.which);
        assert_eq!(loaded.tracks.len(), config.tracks.len());
        assert_eq!(loaded.tracks[2].spec.values, config.tracks[2].spec.values);

        Ok(())
    }

    #[test]
    fn test_example_toml_generation() {
        let example = AnnotationConfig::example_toml().unwrap();
        assert!(example.contains("[[track]]"));
        assert!(example.contains("stacked_bar"));

        let annotation = AnnotationConfig::from_toml_str(&example).unwrap().build().unwrap();
        assert_eq!(annotation.len(), 3);
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = AnnotationConfig::from_toml_str("which = ").unwrap_err();
        assert!(matches!(err, crate::error::AnnotationError::Config { .. }));
    }
}
