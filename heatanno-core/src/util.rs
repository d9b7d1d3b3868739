//! Shared numeric and coercion helpers for the track variants

use crate::error::{AnnotationError, AnnotationResult};

/// Box and violin glyphs take this share of the slot between positions
pub(crate) const DISTRIBUTION_WIDTH_FACTOR: f64 = 0.75;

/// Fail before building primitives when items and positions disagree
pub(crate) fn check_positions(track: &str, n_values: usize, positions: &[f64]) -> AnnotationResult<()> {
    if n_values != positions.len() {
        return Err(AnnotationError::shape_mismatch(track, n_values, positions.len()));
    }
    Ok(())
}

/// Gather `values[order[i]]` for every `i`; subsets and repeats are allowed
pub(crate) fn permute<T: Clone>(track: &str, values: &[T], order: &[usize]) -> AnnotationResult<Vec<T>> {
    order
        .iter()
        .map(|&i| {
            values
                .get(i)
                .cloned()
                .ok_or_else(|| AnnotationError::invalid_order(track, i, values.len()))
        })
        .collect()
}

/// Distance between neighbouring positions, 1.0 when there is only one
pub(crate) fn position_spacing(positions: &[f64]) -> f64 {
    match positions {
        [first, second, ..] => (second - first).abs(),
        _ => 1.0,
    }
}

/// Require every row of a matrix to have the same width; returns that width
pub(crate) fn matrix_width(track: &str, rows: &[Vec<f64>]) -> AnnotationResult<usize> {
    let width = rows.first().map(Vec::len).unwrap_or(0);
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
        return Err(AnnotationError::shape(
            track,
            format!("row {} has {} columns, expected {}", i, row.len(), width),
        ));
    }
    Ok(width)
}

/// String form used for labels; integral floats print without a fraction
pub(crate) fn number_label(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Sorted distinct values
pub(crate) fn distinct_sorted<T: Clone + Ord>(values: &[T]) -> Vec<T> {
    let mut out: Vec<T> = values.to_vec();
    out.sort();
    out.dedup();
    out
}

/// Sorted distinct floats; every NaN collapses into one trailing entry
pub(crate) fn distinct_sorted_floats(values: &[f64]) -> Vec<f64> {
    let mut out: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    out.sort_by(f64::total_cmp);
    out.dedup();
    if values.iter().any(|v| v.is_nan()) {
        out.push(f64::NAN);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_positions() {
        assert!(check_positions("t", 2, &[0.0, 1.0]).is_ok());
        let err = check_positions("t", 3, &[0.0, 1.0]).unwrap_err();
        assert_eq!(err, AnnotationError::shape_mismatch("t", 3, 2));
    }

    #[test]
    fn test_permute_subset_and_bounds() {
        let values = vec!["a", "b", "c"];
        assert_eq!(permute("t", &values, &[2, 0]).unwrap(), vec!["c", "a"]);
        assert!(matches!(
            permute("t", &values, &[3]),
            Err(AnnotationError::InvalidOrder { index: 3, len: 3, .. })
        ));
    }

    #[test]
    fn test_position_spacing() {
        assert_eq!(position_spacing(&[0.0, 2.0, 4.0]), 2.0);
        assert_eq!(position_spacing(&[5.0]), 1.0);
        assert_eq!(position_spacing(&[3.0, 1.0]), 2.0);
    }

    #[test]
    fn test_matrix_width_ragged() {
        assert_eq!(matrix_width("t", &[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap(), 2);
        assert!(matrix_width("t", &[vec![1.0], vec![3.0, 4.0]]).is_err());
    }

    #[test]
    fn test_number_label() {
        assert_eq!(number_label(3.0), "3");
        assert_eq!(number_label(2.5), "2.5");
    }

    #[test]
    fn test_distinct_sorted() {
        assert_eq!(distinct_sorted(&[3, 1, 3, 2]), vec![1, 2, 3]);
        assert_eq!(distinct_sorted(&["b", "a", "b"]), vec!["a", "b"]);
    }

    #[test]
    fn test_distinct_sorted_floats_collapses_nan() {
        assert_eq!(distinct_sorted_floats(&[2.0, 1.0, 2.0]), vec![1.0, 2.0]);

        let out = distinct_sorted_floats(&[f64::NAN, 1.0, f64::NAN, 2.0, -f64::NAN, 1.0]);
        assert_eq!(out.len(), 3);
        assert_eq!(&out[..2], &[1.0, 2.0]);
        assert!(out[2].is_nan());

        let many: Vec<f64> = (0..500)
            .map(|i| if i % 29 == 0 { f64::NAN } else { (i % 17) as f64 })
            .collect();
        let out = distinct_sorted_floats(&many);
        assert_eq!(out.len(), 18);
        assert!(out[..17].windows(2).all(|w| w[0] < w[1]));
    }
}
