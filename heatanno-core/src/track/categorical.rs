use super::Track;
use crate::color::{categorical_colorscale, generate_colors, ColorSpec, Colorscale, Palette};
use crate::error::{AnnotationError, AnnotationResult};
use crate::trace::{legend_marker, HeatmapTrace, Trace};
use crate::types::{Axis, TrackKind, Values};
use crate::util::{check_positions, distinct_sorted, distinct_sorted_floats, number_label, permute};
use std::collections::HashMap;

/// Category order, codes and colors fixed when a track is first built.
///
/// Reordering copies this verbatim so a category never changes color.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryIdentity {
    categories: Vec<String>,
    cat_to_int: HashMap<String, usize>,
    colors: HashMap<String, String>,
}

impl CategoryIdentity {
    fn new(categories: Vec<String>, palette: Vec<String>) -> Self {
        let cat_to_int = categories
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), i))
            .collect();
        let colors = categories.iter().cloned().zip(palette).collect();
        Self {
            categories,
            cat_to_int,
            colors,
        }
    }

    /// Colors in category order
    fn ordered_colors(&self) -> Vec<String> {
        self.categories
            .iter()
            .map(|c| self.colors.get(c).cloned().unwrap_or_default())
            .collect()
    }
}

/// Discrete-valued track drawn as a strip of colored swatches
#[derive(Debug, Clone, PartialEq)]
pub struct CategoricalTrack {
    name: String,
    values: Vec<String>,
    identity: CategoryIdentity,
    size: f64,
}

impl CategoricalTrack {
    /// Build from text, integer or float values.
    ///
    /// Categories are the distinct values in natural order: numeric order for
    /// numbers, lexicographic order for text.
    pub fn new<S: Into<String>, V: Into<Values>>(name: S, values: V) -> AnnotationResult<Self> {
        let name = name.into();
        let (values, categories) = match values.into() {
            Values::Text(v) => {
                let categories = distinct_sorted(&v);
                (v, categories)
            }
            Values::Integer(v) => {
                let categories = distinct_sorted(&v).iter().map(|c| c.to_string()).collect();
                (v.iter().map(|x| x.to_string()).collect(), categories)
            }
            Values::Float(v) => {
                let categories = distinct_sorted_floats(&v).into_iter().map(number_label).collect();
                (v.iter().map(|&x| number_label(x)).collect(), categories)
            }
            Values::Matrix(_) => {
                return Err(AnnotationError::shape(&name, "categorical values must be 1-D"));
            }
        };
        log::debug!("Track '{}' has {} categories", name, categories.len());

        let palette = generate_colors(categories.len(), Palette::Auto);
        Ok(Self {
            name,
            values,
            identity: CategoryIdentity::new(categories, palette),
            size: TrackKind::Categorical.default_size(),
        })
    }

    /// Copy constructor: new values, identity taken as given.
    ///
    /// `values` must already be labels of `identity`.
    pub(crate) fn with_identity(name: String, values: Vec<String>, identity: CategoryIdentity, size: f64) -> Self {
        Self {
            name,
            values,
            identity,
            size,
        }
    }

    /// Replace the generated colors with explicit ones
    pub fn with_colors(mut self, colors: &ColorSpec) -> AnnotationResult<Self> {
        let resolved = colors.resolve(&self.name, &self.identity.categories)?;
        self.identity.colors = self.identity.categories.iter().cloned().zip(resolved).collect();
        Ok(self)
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Per-item category labels
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn categories(&self) -> &[String] {
        &self.identity.categories
    }

    pub fn identity(&self) -> &CategoryIdentity {
        &self.identity
    }

    pub fn colors(&self) -> &HashMap<String, String> {
        &self.identity.colors
    }

    pub fn color_of(&self, category: &str) -> Option<&str> {
        self.identity.colors.get(category).map(String::as_str)
    }

    pub fn code_of(&self, category: &str) -> Option<usize> {
        self.identity.cat_to_int.get(category).copied()
    }

    /// Integer code of every item
    pub fn codes(&self) -> Vec<usize> {
        self.values
            .iter()
            .map(|v| self.code_of(v).unwrap_or_default())
            .collect()
    }

    pub fn colorscale(&self) -> Colorscale {
        categorical_colorscale(&self.identity.ordered_colors(), self.identity.categories.len())
    }

    pub fn reorder(&self, order: &[usize]) -> AnnotationResult<Self> {
        let values = permute(&self.name, &self.values, order)?;
        Ok(Self::with_identity(
            self.name.clone(),
            values,
            self.identity.clone(),
            self.size,
        ))
    }
}

impl Track for CategoricalTrack {
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
        TrackKind::Categorical
    }

    fn to_traces(&self, axis: Axis, positions: &[f64]) -> AnnotationResult<Vec<Trace>> {
        check_positions(&self.name, self.values.len(), positions)?;

        let codes: Vec<f64> = self.codes().into_iter().map(|c| c as f64).collect();
        let (z, customdata, x, y) = match axis {
            Axis::X => (
                vec![codes],
                vec![self.values.clone()],
                Some(positions.to_vec()),
                None,
            ),
            Axis::Y => (
                codes.into_iter().map(|c| vec![c]).collect(),
                self.values.iter().map(|v| vec![v.clone()]).collect(),
                None,
                Some(positions.to_vec()),
            ),
        };

        let n_categories = self.identity.categories.len();
        Ok(vec![Trace::Heatmap(HeatmapTrace {
            name: self.name.clone(),
            z,
            x,
            y,
            customdata,
            colorscale: self.colorscale(),
            zmin: -0.5,
            zmax: n_categories as f64 - 0.5,
            showscale: false,
            xgap: 1.0,
            ygap: 1.0,
            hovertemplate: format!("{}: %{{customdata}}<extra></extra>", self.name),
        })])
    }

    fn legend_items(&self) -> Vec<Trace> {
        self.identity
            .categories
            .iter()
            .map(|category| {
                let color = self.color_of(category).unwrap_or_default();
                legend_marker(category, color, &self.name)
            })
            .collect()
    }
}
