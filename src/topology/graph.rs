//! Weighted graphs as 1-dimensional simplicial complexes
//!
//! Builders for the graph inputs the analysis pipeline consumes: plain
//! weighted edge lists, bipartite adjacency matrices, and random
//! stratified graphs. Vertex weights produced here are provisional; the
//! analysis pipeline reassigns them from the incident edges.

use super::complex::SimplicialComplex;
use super::simplex::{Simplex, Vertex};
use crate::error::{Result, TopologyError};
use ndarray::Array2;
use rand::Rng;
use rand_distr::{Distribution, Uniform};
use std::collections::BTreeMap;

/// Build a graph from weighted edges.
///
/// Every endpoint becomes a vertex carrying the smallest weight of its
/// incident edges, so the result is a valid ascending filtration as soon
/// as it is sorted. Vertices appear before edges, in ascending id order.
pub fn from_edge_list(edges: &[(Vertex, Vertex, f64)]) -> SimplicialComplex {
    let mut vertex_weight: BTreeMap<Vertex, f64> = BTreeMap::new();
    for &(u, v, w) in edges {
        for x in [u, v] {
            vertex_weight
                .entry(x)
                .and_modify(|current| *current = current.min(w))
                .or_insert(w);
        }
    }

    let vertices = vertex_weight.into_iter().map(|(v, w)| Simplex::vertex(v, w));
    let edges = edges
        .iter()
        .filter(|(u, v, _)| u != v)
        .map(|&(u, v, w)| Simplex::edge(u, v, w));

    SimplicialComplex::from_simplices(vertices.chain(edges))
}

/// Build the complete bipartite graph described by an adjacency matrix.
///
/// Row `i` becomes vertex `i`, column `j` becomes vertex `nrows + j`, and
/// entry `(i, j)` is the weight of the edge between them. Non-finite
/// entries are treated as absent edges.
pub fn from_bipartite_adjacency(matrix: &Array2<f64>) -> SimplicialComplex {
    let (rows, cols) = matrix.dim();
    let mut edges = Vec::with_capacity(rows * cols);

    for i in 0..rows {
        for j in 0..cols {
            let w = matrix[[i, j]];
            if w.is_finite() {
                edges.push((i, rows + j, w));
            }
        }
    }

    from_edge_list(&edges)
}

/// Random stratified graph.
///
/// `strata[i]` vertices form stratum `i`. Every vertex of stratum `i` is
/// connected to every vertex of stratum `i + 1`; there are no edges within
/// a stratum. Edge weights are drawn uniformly from `[-1, 1]`, vertices
/// get weight 0.
pub fn random_stratified_graph<R: Rng + ?Sized>(
    strata: &[usize],
    rng: &mut R,
) -> Result<SimplicialComplex> {
    if strata.len() <= 1 {
        return Err(TopologyError::InvalidStratification(format!(
            "need at least two strata, got {}",
            strata.len()
        )));
    }

    let uniform = Uniform::new_inclusive(-1.0, 1.0)
        .map_err(|e| TopologyError::InvalidStratification(e.to_string()))?;

    let n_vertices: usize = strata.iter().sum();
    let mut simplices: Vec<Simplex> = (0..n_vertices).map(|v| Simplex::vertex(v, 0.0)).collect();

    let mut offset = 0;
    for pair in strata.windows(2) {
        let (lower, upper) = (pair[0], pair[1]);
        for j in 0..lower {
            for k in 0..upper {
                simplices.push(Simplex::edge(
                    offset + j,
                    offset + lower + k,
                    uniform.sample(rng),
                ));
            }
        }
        offset += lower;
    }

    Ok(SimplicialComplex::from_simplices(simplices))
}

/// Smallest absolute edge weight, if the complex has edges.
///
/// Edge weights are never touched by vertex weight assignment, so this is
/// the stable reference value used in place of an infinite death.
pub fn min_absolute_edge_weight(complex: &SimplicialComplex) -> Option<f64> {
    complex
        .iter()
        .filter(|s| s.dimension() == 1)
        .map(|s| s.data().abs())
        .reduce(f64::min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_edge_list_vertex_weights() {
        let k = from_edge_list(&[(0, 1, 0.5), (1, 2, -0.3)]);
        assert_eq!(k.len(), 5);
        let weight = |v: Vertex| k.index_of(&[v]).and_then(|i| k.get(i)).map(Simplex::data);
        assert_eq!(weight(0), Some(0.5));
        assert_eq!(weight(1), Some(-0.3));
        assert_eq!(weight(2), Some(-0.3));
    }

    #[test]
    fn test_bipartite_adjacency() {
        let m = array![[0.1, 0.2, 0.3], [0.4, f64::NAN, 0.6]];
        let k = from_bipartite_adjacency(&m);
        assert_eq!(k.iter().filter(|s| s.dimension() == 0).count(), 5);
        assert_eq!(k.iter().filter(|s| s.dimension() == 1).count(), 5);
        assert!(k.index_of(&[1, 3]).is_none());
        assert!(k.index_of(&[1, 4]).is_some());
    }

    #[test]
    fn test_stratified_graph_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let k = random_stratified_graph(&[2, 3, 1], &mut rng).unwrap();
        assert_eq!(k.iter().filter(|s| s.dimension() == 0).count(), 6);
        // 2*3 + 3*1 edges, none inside a stratum
        assert_eq!(k.iter().filter(|s| s.dimension() == 1).count(), 9);
        assert!(k.index_of(&[0, 1]).is_none());
        assert!(k.index_of(&[4, 5]).is_some());
        assert!(k
            .iter()
            .filter(|s| s.dimension() == 1)
            .all(|s| (-1.0..=1.0).contains(&s.data())));
    }

    #[test]
    fn test_stratified_graph_rejects_single_stratum() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(
            random_stratified_graph(&[4], &mut rng),
            Err(TopologyError::InvalidStratification(_))
        ));
    }

    #[test]
    fn test_min_absolute_edge_weight() {
        let k = from_edge_list(&[(0, 1, 0.5), (1, 2, -0.3)]);
        assert_eq!(min_absolute_edge_weight(&k), Some(0.3));
        assert_eq!(min_absolute_edge_weight(&SimplicialComplex::new()), None);
    }
}
