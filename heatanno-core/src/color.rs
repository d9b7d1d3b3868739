/*!
# Color Utility

Palettes for categorical and stacked tracks, and the discrete colorscale
used to draw a categorical track as a heatmap-style swatch strip.
*/

use crate::error::{AnnotationError, AnnotationResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// d3 category10, the chart library's classic qualitative palette
const CATEGORY10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd",
    "#8c564b", "#e377c2", "#7f7f7f", "#bcbd22", "#17becf",
];

/// ColorBrewer Set2
const SET2: [&str; 8] = [
    "#66c2a5", "#fc8d62", "#8da0cb", "#e78ac3",
    "#a6d854", "#ffd92f", "#e5c494", "#b3b3b3",
];

/// Palette family requested from [`generate_colors`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Palette {
    /// Category10 while it has enough colors, evenly spaced hues beyond
    #[default]
    Auto,
    Category10,
    Set2,
    /// Evenly spaced hues at fixed saturation and lightness
    Hue,
}

/// Produce `n` colors as `#rrggbb` strings.
///
/// Fixed palettes cycle when `n` exceeds their length; `Auto` switches to
/// evenly spaced hues instead so every color stays distinct.
pub fn generate_colors(n: usize, palette: Palette) -> Vec<String> {
    match palette {
        Palette::Auto if n <= CATEGORY10.len() => cycle(&CATEGORY10, n),
        Palette::Auto | Palette::Hue => hue_colors(n),
        Palette::Category10 => cycle(&CATEGORY10, n),
        Palette::Set2 => cycle(&SET2, n),
    }
}

fn cycle(base: &[&str], n: usize) -> Vec<String> {
    base.iter().cycle().take(n).map(|c| c.to_string()).collect()
}

fn hue_colors(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let hue = 360.0 * i as f64 / n as f64;
            hsl_to_hex(hue, 0.65, 0.55)
        })
        .collect()
}

fn hsl_to_hex(hue: f64, saturation: f64, lightness: f64) -> String {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = (hue % 360.0) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    let to_byte = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    format!("#{:02x}{:02x}{:02x}", to_byte(r), to_byte(g), to_byte(b))
}

/// Stepwise colorscale: each bin is a flat band bounded by two stops
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Colorscale(pub Vec<(f64, String)>);

impl Colorscale {
    pub fn stops(&self) -> &[(f64, String)] {
        &self.0
    }

    /// Number of discrete color bins
    pub fn bins(&self) -> usize {
        self.0.len() / 2
    }

    /// Color of bin `i`
    pub fn bin_color(&self, i: usize) -> Option<&str> {
        self.0.get(2 * i).map(|(_, c)| c.as_str())
    }
}

/// Build a discrete colorscale with `n` equal bins from `colors`.
///
/// Used with `zmin = -0.5` and `zmax = n - 0.5`, integer code `i` falls in
/// the middle of bin `i`. Colors are reused cyclically if fewer than `n` are
/// given.
pub fn categorical_colorscale(colors: &[String], n: usize) -> Colorscale {
    if n == 0 || colors.is_empty() {
        return Colorscale(Vec::new());
    }
    let mut stops = Vec::with_capacity(2 * n);
    for i in 0..n {
        let color = &colors[i % colors.len()];
        stops.push((i as f64 / n as f64, color.clone()));
        stops.push(((i + 1) as f64 / n as f64, color.clone()));
    }
    Colorscale(stops)
}

/// Explicit colors for a multi-color track, keyed by label or positional
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Map(BTreeMap<String, String>),
    List(Vec<String>),
}

impl ColorSpec {
    /// Assign one color per label.
    ///
    /// A map may leave labels out; those keep the generated palette color at
    /// their index. A list is applied in label order and must cover them all.
    pub fn resolve(&self, track: &str, labels: &[String]) -> AnnotationResult<Vec<String>> {
        match self {
            ColorSpec::Map(map) => {
                let fallback = generate_colors(labels.len(), Palette::Auto);
                Ok(labels
                    .iter()
                    .zip(fallback)
                    .map(|(label, generated)| map.get(label).cloned().unwrap_or(generated))
                    .collect())
            }
            ColorSpec::List(list) => {
                if list.len() < labels.len() {
                    return Err(AnnotationError::invalid_colors(
                        track,
                        format!("{} colors given for {} labels", list.len(), labels.len()),
                    ));
                }
                Ok(list.iter().take(labels.len()).cloned().collect())
            }
        }
    }
}

impl From<Vec<String>> for ColorSpec {
    fn from(colors: Vec<String>) -> Self {
        ColorSpec::List(colors)
    }
}

impl From<Vec<&str>> for ColorSpec {
    fn from(colors: Vec<&str>) -> Self {
        ColorSpec::List(colors.into_iter().map(String::from).collect())
    }
}

impl From<BTreeMap<String, String>> for ColorSpec {
    fn from(colors: BTreeMap<String, String>) -> Self {
        ColorSpec::Map(colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_colors_auto() {
        let colors = generate_colors(3, Palette::Auto);
        assert_eq!(colors, vec!["#1f77b4", "#ff7f0e", "#2ca02c"]);

        let many = generate_colors(14, Palette::Auto);
        assert_eq!(many.len(), 14);
        let mut distinct = many.clone();
        distinct.sort();
        distinct.dedup();
        assert_eq!(distinct.len(), 14);
    }

    #[test]
    fn test_fixed_palettes_cycle() {
        let colors = generate_colors(10, Palette::Set2);
        assert_eq!(colors[8], colors[0]);
        assert!(generate_colors(0, Palette::Category10).is_empty());
    }

    #[test]
    fn test_hsl_primary() {
        assert_eq!(hsl_to_hex(0.0, 1.0, 0.5), "#ff0000");
        assert_eq!(hsl_to_hex(120.0, 1.0, 0.5), "#00ff00");
        assert_eq!(hsl_to_hex(240.0, 1.0, 0.5), "#0000ff");
    }

    #[test]
    fn test_categorical_colorscale_bins() {
        let colors = generate_colors(3, Palette::Auto);
        let scale = categorical_colorscale(&colors, 3);
        assert_eq!(scale.bins(), 3);
        assert_eq!(scale.stops().first().map(|s| s.0), Some(0.0));
        assert_eq!(scale.stops().last().map(|s| s.0), Some(1.0));
        assert_eq!(scale.bin_color(1), Some("#ff7f0e"));
        assert_eq!(scale.stops()[1].1, scale.stops()[0].1);
    }

    #[test]
    fn test_categorical_colorscale_empty() {
        assert_eq!(categorical_colorscale(&[], 3).bins(), 0);
        assert_eq!(categorical_colorscale(&["#000000".into()], 0).bins(), 0);
    }

    #[test]
    fn test_color_spec_map_fallback() {
        let mut map = BTreeMap::new();
        map.insert("B".to_string(), "#000000".to_string());
        let labels = vec!["A".to_string(), "B".to_string()];
        let colors = ColorSpec::Map(map).resolve("t", &labels).unwrap();
        assert_eq!(colors, vec!["#1f77b4", "#000000"]);
    }

    #[test]
    fn test_color_spec_list_too_short() {
        let labels = vec!["A".to_string(), "B".to_string()];
        let err = ColorSpec::from(vec!["#000000"]).resolve("t", &labels).unwrap_err();
        assert!(matches!(err, AnnotationError::InvalidColors { .. }));
    }
}
