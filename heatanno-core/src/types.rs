use crate::error::AnnotationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Axis a track's positions run along.
///
/// `X` annotates heatmap columns: items are laid out along x and the
/// annotation's own dimension (bar height, distribution values) is on y.
/// `Y` is the mirror image for rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }

    /// The axis carrying the annotation's value dimension
    pub fn opposite(&self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = AnnotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            other => Err(AnnotationError::InvalidAxis(other.to_string())),
        }
    }
}

/// Orientation of a whole annotation container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Which {
    /// Tracks annotate columns (drawn above or below the heatmap)
    #[default]
    Column,
    /// Tracks annotate rows (drawn left or right of the heatmap)
    Row,
}

impl Which {
    pub fn axis(&self) -> Axis {
        match self {
            Which::Column => Axis::X,
            Which::Row => Axis::Y,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Which::Column => "column",
            Which::Row => "row",
        }
    }
}

impl fmt::Display for Which {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Which {
    type Err = AnnotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "column" | "col" => Ok(Which::Column),
            "row" => Ok(Which::Row),
            other => Err(AnnotationError::InvalidWhich(other.to_string())),
        }
    }
}

/// Raw per-item values handed to the factory layer.
///
/// Deserialization tries each shape in declaration order, so an all-integer
/// array becomes `Integer` and a mixed integer/float array becomes `Float`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Values {
    Text(Vec<String>),
    Integer(Vec<i64>),
    Float(Vec<f64>),
    /// One row of observations (or stack layers) per item
    Matrix(Vec<Vec<f64>>),
}

impl Values {
    /// Number of items (rows for a matrix)
    pub fn len(&self) -> usize {
        match self {
            Values::Text(v) => v.len(),
            Values::Integer(v) => v.len(),
            Values::Float(v) => v.len(),
            Values::Matrix(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ndim(&self) -> usize {
        match self {
            Values::Matrix(_) => 2,
            _ => 1,
        }
    }

    pub fn dtype(&self) -> &'static str {
        match self {
            Values::Text(_) => "text",
            Values::Integer(_) => "integer",
            Values::Float(_) => "float",
            Values::Matrix(_) => "matrix",
        }
    }

    /// 1-D numeric view, if the values are numeric and one-dimensional
    pub fn as_f64(&self) -> Option<Vec<f64>> {
        match self {
            Values::Integer(v) => Some(v.iter().map(|&x| x as f64).collect()),
            Values::Float(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl From<Vec<String>> for Values {
    fn from(v: Vec<String>) -> Self {
        Values::Text(v)
    }
}

impl From<Vec<&str>> for Values {
    fn from(v: Vec<&str>) -> Self {
        Values::Text(v.into_iter().map(String::from).collect())
    }
}

impl From<Vec<i64>> for Values {
    fn from(v: Vec<i64>) -> Self {
        Values::Integer(v)
    }
}

impl From<Vec<i32>> for Values {
    fn from(v: Vec<i32>) -> Self {
        Values::Integer(v.into_iter().map(i64::from).collect())
    }
}

impl From<Vec<f64>> for Values {
    fn from(v: Vec<f64>) -> Self {
        Values::Float(v)
    }
}

impl From<Vec<Vec<f64>>> for Values {
    fn from(v: Vec<Vec<f64>>) -> Self {
        Values::Matrix(v)
    }
}

/// Tag for the closed set of track variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackKind {
    Categorical,
    Bar,
    Scatter,
    StackedBar,
    Box,
    Violin,
}

impl TrackKind {
    pub const ALL: [TrackKind; 6] = [
        TrackKind::Categorical,
        TrackKind::Bar,
        TrackKind::Scatter,
        TrackKind::StackedBar,
        TrackKind::Box,
        TrackKind::Violin,
    ];

    /// Parse a factory `type` tag; unknown tags yield `None`
    pub fn parse(tag: &str) -> Option<TrackKind> {
        match tag.trim() {
            "categorical" => Some(TrackKind::Categorical),
            "bar" => Some(TrackKind::Bar),
            "scatter" => Some(TrackKind::Scatter),
            "stacked_bar" => Some(TrackKind::StackedBar),
            "box" => Some(TrackKind::Box),
            "violin" => Some(TrackKind::Violin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrackKind::Categorical => "categorical",
            TrackKind::Bar => "bar",
            TrackKind::Scatter => "scatter",
            TrackKind::StackedBar => "stacked_bar",
            TrackKind::Box => "box",
            TrackKind::Violin => "violin",
        }
    }

    /// Fraction of the figure extent a track of this kind takes by default
    pub fn default_size(&self) -> f64 {
        match self {
            TrackKind::Categorical => 0.025,
            TrackKind::Bar | TrackKind::Scatter => 0.06,
            TrackKind::StackedBar | TrackKind::Box | TrackKind::Violin => 0.08,
        }
    }
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_which_axis() {
        assert_eq!(Which::Column.axis(), Axis::X);
        assert_eq!(Which::Row.axis(), Axis::Y);
        assert_eq!("row".parse::<Which>().unwrap(), Which::Row);
        assert!("diagonal".parse::<Which>().is_err());
    }

    #[test]
    fn test_axis_parse() {
        assert_eq!("X".parse::<Axis>().unwrap(), Axis::X);
        assert_eq!(Axis::X.opposite(), Axis::Y);
        assert!(matches!("z".parse::<Axis>(), Err(AnnotationError::InvalidAxis(_))));
    }

    #[test]
    fn test_track_kind_parse() {
        for kind in TrackKind::ALL {
            assert_eq!(TrackKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(TrackKind::parse("heatmap"), None);
        assert_eq!(TrackKind::Categorical.default_size(), 0.025);
    }

    #[test]
    fn test_values_deserialize_shapes() {
        let v: Values = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(v, Values::Text(vec!["a".into(), "b".into()]));

        let v: Values = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(v, Values::Integer(vec![1, 2, 3]));

        let v: Values = serde_json::from_str("[1, 2.5]").unwrap();
        assert_eq!(v, Values::Float(vec![1.0, 2.5]));

        let v: Values = serde_json::from_str("[[1, 2], [3, 4]]").unwrap();
        assert_eq!(v.ndim(), 2);
        assert_eq!(v.len(), 2);
    }
}
