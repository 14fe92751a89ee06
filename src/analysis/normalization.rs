//! Weight and diagram normalization
//!
//! Weight normalization rescales every simplex weight using statistics of
//! the edge weights only, since vertex weights are derived values. Diagram
//! normalization maps diagram coordinates into [0, 1] so that diagrams of
//! different graphs become comparable.

use super::config::Normalization;
use crate::diagram::{PersistenceDiagram, Point};
use crate::error::{Result, TopologyError};
use crate::topology::SimplicialComplex;

/// Sample mean
fn sample_mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator)
fn sample_standard_deviation(values: &[f64]) -> f64 {
    let mu = sample_mean(values);
    let variance = values.iter().map(|x| (x - mu).powi(2)).sum::<f64>() / (values.len() as f64 - 1.0);
    variance.sqrt()
}

/// Rescale all weights of `complex` in place.
///
/// Fails with [`TopologyError::DegenerateWeights`] when the edge weights do
/// not admit the requested scaling (no edges, all zero, zero range or zero
/// deviation). The complex is untouched in that case.
pub fn normalize_complex(complex: &mut SimplicialComplex, normalization: Normalization) -> Result<()> {
    let weights: Vec<f64> = complex
        .iter()
        .filter(|s| s.dimension() == 1)
        .map(|s| s.data())
        .collect();

    if weights.is_empty() {
        return Err(TopologyError::DegenerateWeights("complex has no edges"));
    }

    let min = weights.iter().copied().fold(f64::INFINITY, f64::min);
    let max = weights.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let scale: Box<dyn Fn(f64) -> f64> = match normalization {
        Normalization::Abs => {
            let m = min.abs().max(max.abs());
            if m == 0.0 {
                return Err(TopologyError::DegenerateWeights("all edge weights are zero"));
            }
            Box::new(move |w| w / m)
        }
        Normalization::MinMax => {
            if min == max {
                return Err(TopologyError::DegenerateWeights("edge weights have zero range"));
            }
            // [min, max] -> [0, 1] -> [-1, 1]
            Box::new(move |w| 2.0 * (w - min) / (max - min) - 1.0)
        }
        Normalization::Standardize => {
            if weights.len() < 2 {
                return Err(TopologyError::DegenerateWeights("need at least two edges to standardize"));
            }
            let mu = sample_mean(&weights);
            let sigma = sample_standard_deviation(&weights);
            if sigma == 0.0 {
                return Err(TopologyError::DegenerateWeights("edge weights have zero deviation"));
            }
            Box::new(move |w| (w - mu) / sigma)
        }
    };

    for position in 0..complex.len() {
        if let Some(w) = complex.get(position).map(|s| s.data()) {
            complex.set_data(position, scale(w))?;
        }
    }
    Ok(())
}

/// Smallest and largest weight over all simplices
pub fn data_range(complex: &SimplicialComplex) -> Option<(f64, f64)> {
    complex.iter().map(|s| s.data()).fold(None, |range, w| match range {
        None => Some((w, w)),
        Some((lo, hi)) => Some((lo.min(w), hi.max(w))),
    })
}

/// Map diagram coordinates from `[min, max]` to `[0, 1]`.
///
/// A zero range leaves the diagram unchanged.
pub fn normalize_diagram(diagram: &mut PersistenceDiagram, min: f64, max: f64) {
    if min == max {
        return;
    }
    diagram.map_points(|p| Point::new((p.birth - min) / (max - min), (p.death - min) / (max - min)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::{from_edge_list, Simplex};

    fn edge_weights(k: &SimplicialComplex) -> Vec<f64> {
        k.iter().filter(|s| s.dimension() == 1).map(Simplex::data).collect()
    }

    #[test]
    fn test_statistics() {
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((sample_mean(&v) - 5.0).abs() < 1e-10);
        assert!((sample_standard_deviation(&v) - (32.0_f64 / 7.0).sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_abs() {
        let mut k = from_edge_list(&[(0, 1, 0.5), (1, 2, -2.0)]);
        normalize_complex(&mut k, Normalization::Abs).unwrap();
        assert_eq!(edge_weights(&k), vec![0.25, -1.0]);
    }

    #[test]
    fn test_minmax() {
        let mut k = from_edge_list(&[(0, 1, 1.0), (1, 2, 3.0), (2, 3, 2.0)]);
        normalize_complex(&mut k, Normalization::MinMax).unwrap();
        assert_eq!(edge_weights(&k), vec![-1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_standardize() {
        let mut k = from_edge_list(&[(0, 1, 1.0), (1, 2, 3.0)]);
        normalize_complex(&mut k, Normalization::Standardize).unwrap();
        let w = edge_weights(&k);
        let s = 2.0_f64.sqrt();
        assert!((w[0] + 1.0 / s).abs() < 1e-10);
        assert!((w[1] - 1.0 / s).abs() < 1e-10);
    }

    #[test]
    fn test_degenerate_weights() {
        let mut k = from_edge_list(&[(0, 1, 1.0), (1, 2, 1.0)]);
        assert!(matches!(
            normalize_complex(&mut k, Normalization::MinMax),
            Err(TopologyError::DegenerateWeights(_))
        ));
        assert_eq!(edge_weights(&k), vec![1.0, 1.0]);

        let mut empty = SimplicialComplex::new();
        assert!(normalize_complex(&mut empty, Normalization::Abs).is_err());
    }

    #[test]
    fn test_normalize_diagram() {
        let mut d = PersistenceDiagram::from_points(1, [Point::new(-1.0, 1.0), Point::new(0.0, 0.5)]);
        normalize_diagram(&mut d, -1.0, 1.0);
        assert_eq!(d.points(), &[Point::new(0.0, 1.0), Point::new(0.5, 0.75)]);
    }

    #[test]
    fn test_data_range() {
        let k = from_edge_list(&[(0, 1, 0.5), (1, 2, -2.0)]);
        assert_eq!(data_range(&k), Some((-2.0, 0.5)));
        assert_eq!(data_range(&SimplicialComplex::new()), None);
    }
}
