//! Vietoris-Rips Complex Construction
//!
//! The Vietoris-Rips complex VR_ε(X) is a simplicial complex where:
//! - 0-simplices are the points in X
//! - A k-simplex [v₀, ..., vₖ] exists iff d(vᵢ, vⱼ) ≤ ε for all i,j
//!
//! Every simplex is weighted by its diameter (the longest edge it
//! contains), which makes the complex a filtration under
//! [`Filtration::Standard`](super::Filtration::Standard).

use super::complex::SimplicialComplex;
use super::filtration::Filtration;
use super::simplex::{Simplex, Vertex};
use ndarray::Array2;

/// Vietoris-Rips complex builder
#[derive(Debug, Clone)]
pub struct VietorisRips {
    /// Distance matrix (precomputed)
    distances: Array2<f64>,
    /// Maximum filtration value
    max_epsilon: f64,
    /// Highest simplex dimension to generate
    max_dim: usize,
}

impl VietorisRips {
    /// Create a new VR builder from a distance matrix
    pub fn new(distances: Array2<f64>, max_epsilon: f64, max_dim: usize) -> Self {
        Self {
            distances,
            max_epsilon,
            max_dim,
        }
    }

    /// Create from point cloud (one point per row, Euclidean metric)
    pub fn from_points(points: &Array2<f64>, max_epsilon: f64, max_dim: usize) -> Self {
        Self::new(euclidean_distances(points), max_epsilon, max_dim)
    }

    /// Number of points
    pub fn n_points(&self) -> usize {
        self.distances.nrows()
    }

    /// Build the filtered clique complex, sorted into filtration order.
    ///
    /// Non-finite distances never produce an edge.
    pub fn build(&self) -> SimplicialComplex {
        let n = self.n_points();

        // Neighbours with a larger index, so every clique is enumerated once
        let neighbours: Vec<Vec<Vertex>> = (0..n)
            .map(|i| {
                (i + 1..n)
                    .filter(|&j| {
                        let d = self.distances[[i, j]];
                        d.is_finite() && d <= self.max_epsilon
                    })
                    .collect()
            })
            .collect();

        let mut simplices = Vec::new();
        for v in 0..n {
            simplices.push(Simplex::vertex(v, 0.0));
            self.expand(&[v], 0.0, &neighbours[v], &neighbours, &mut simplices);
        }

        let mut complex = SimplicialComplex::from_simplices(simplices);
        Filtration::Standard.apply(&mut complex, false);
        complex
    }

    /// Recursively extend `clique` by every common neighbour.
    fn expand(
        &self,
        clique: &[Vertex],
        diameter: f64,
        candidates: &[Vertex],
        neighbours: &[Vec<Vertex>],
        out: &mut Vec<Simplex>,
    ) {
        if clique.len() > self.max_dim {
            return;
        }

        for (pos, &v) in candidates.iter().enumerate() {
            let weight = clique
                .iter()
                .map(|&u| self.distances[[u, v]])
                .fold(diameter, f64::max);

            let mut next: Vec<Vertex> = clique.to_vec();
            next.push(v);
            out.push(Simplex::from_clique(next.iter().copied(), weight));

            let remaining: Vec<Vertex> = candidates[pos + 1..]
                .iter()
                .copied()
                .filter(|w| neighbours[v].binary_search(w).is_ok())
                .collect();
            self.expand(&next, weight, &remaining, neighbours, out);
        }
    }
}

/// Compute Euclidean distance matrix
pub fn euclidean_distances(points: &Array2<f64>) -> Array2<f64> {
    let n = points.nrows();
    let dim = points.ncols();

    let mut dm = Array2::<f64>::zeros((n, n));

    for i in 0..n {
        for j in i + 1..n {
            let mut dist_sq = 0.0;
            for d in 0..dim {
                let diff = points[[i, d]] - points[[j, d]];
                dist_sq += diff * diff;
            }
            let dist = dist_sq.sqrt();
            dm[[i, j]] = dist;
            dm[[j, i]] = dist;
        }
    }

    dm
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_triangle() {
        // Equilateral triangle with side 1
        let points = array![
            [0.0, 0.0],
            [1.0, 0.0],
            [0.5, 0.75_f64.sqrt()]
        ];

        let k = VietorisRips::from_points(&points, 2.0, 2).build();
        assert_eq!(k.len(), 7);
        assert_eq!(k.dimension(), 2);
        assert!(k.check_filtration_order().is_ok());

        let triangle = k.index_of(&[0, 1, 2]).and_then(|i| k.get(i)).unwrap();
        assert!((triangle.data() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_epsilon_cuts_edges() {
        let dm = array![
            [0.0, 1.0, 5.0],
            [1.0, 0.0, 5.0],
            [5.0, 5.0, 0.0]
        ];
        let k = VietorisRips::new(dm, 2.0, 2).build();
        // three vertices and a single edge
        assert_eq!(k.len(), 4);
        assert!(k.index_of(&[0, 2]).is_none());
    }

    #[test]
    fn test_infinite_distances_are_absent_edges() {
        let dm = array![
            [0.0, 1.0, f64::INFINITY],
            [1.0, 0.0, f64::INFINITY],
            [f64::INFINITY, f64::INFINITY, 0.0]
        ];
        let k = VietorisRips::new(dm, f64::INFINITY, 2).build();
        assert_eq!(k.len(), 4);
        assert!(k.iter().all(|s| s.data().is_finite()));
    }

    #[test]
    fn test_max_dim_limits_cliques() {
        let dm = array![
            [0.0, 1.0, 1.0, 1.0],
            [1.0, 0.0, 1.0, 1.0],
            [1.0, 1.0, 0.0, 1.0],
            [1.0, 1.0, 1.0, 0.0]
        ];
        assert_eq!(VietorisRips::new(dm.clone(), 2.0, 1).build().len(), 4 + 6);
        assert_eq!(VietorisRips::new(dm.clone(), 2.0, 2).build().len(), 4 + 6 + 4);
        assert_eq!(VietorisRips::new(dm, 2.0, 3).build().len(), 4 + 6 + 4 + 1);
    }
}
