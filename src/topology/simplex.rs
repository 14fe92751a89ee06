//! Simplices: vertex sets carrying a filtration value
//!
//! A k-simplex [v₀, ..., vₖ] is stored with its vertices in ascending
//! order, so two simplices with the same vertex set always compare equal
//! regardless of the order the vertices were supplied in. The attached
//! `data` value (filtration weight) does not take part in identity.

use crate::error::{Result, TopologyError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Vertex identifier
pub type Vertex = usize;

/// A simplex with its filtration value
///
/// Deserialization goes through [`Simplex::new`], so stored vertex sets
/// are always sorted and non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "SimplexRecord")]
pub struct Simplex {
    vertices: Vec<Vertex>,
    data: f64,
}

/// Unchecked wire form of a [`Simplex`]
#[derive(Deserialize)]
struct SimplexRecord {
    vertices: Vec<Vertex>,
    #[serde(default)]
    data: f64,
}

impl TryFrom<SimplexRecord> for Simplex {
    type Error = TopologyError;

    fn try_from(record: SimplexRecord) -> Result<Self> {
        Simplex::new(record.vertices, record.data)
    }
}

fn canonical(vertices: impl IntoIterator<Item = Vertex>) -> Vec<Vertex> {
    let mut vertices: Vec<Vertex> = vertices.into_iter().collect();
    vertices.sort_unstable();
    vertices.dedup();
    vertices
}

impl Simplex {
    /// Create a simplex from a vertex set and a weight.
    ///
    /// Vertices are sorted and duplicates are dropped. Fails with
    /// [`TopologyError::EmptySimplex`] for an empty vertex set.
    pub fn new(vertices: impl IntoIterator<Item = Vertex>, data: f64) -> Result<Self> {
        let vertices = canonical(vertices);
        if vertices.is_empty() {
            return Err(TopologyError::EmptySimplex);
        }
        Ok(Self { vertices, data })
    }

    /// Simplex from a vertex set known to be non-empty.
    pub(super) fn from_clique(vertices: impl IntoIterator<Item = Vertex>, data: f64) -> Self {
        let vertices = canonical(vertices);
        debug_assert!(!vertices.is_empty());
        Self { vertices, data }
    }

    /// A 0-simplex
    pub fn vertex(v: Vertex, data: f64) -> Self {
        Self { vertices: vec![v], data }
    }

    /// A 1-simplex
    pub fn edge(u: Vertex, v: Vertex, data: f64) -> Self {
        Self::from_clique([u, v], data)
    }

    /// Dimension = number of vertices - 1
    pub fn dimension(&self) -> usize {
        self.vertices.len() - 1
    }

    /// Sorted vertex set
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Filtration value
    pub fn data(&self) -> f64 {
        self.data
    }

    pub fn set_data(&mut self, data: f64) {
        self.data = data;
    }

    /// Copy of this simplex carrying a different weight
    pub fn with_data(&self, data: f64) -> Self {
        Self {
            vertices: self.vertices.clone(),
            data,
        }
    }

    /// Codimension-1 faces as vertex sets.
    ///
    /// Boundary of [v₀, ..., vₖ] = Σ [v₀, ..., v̂ᵢ, ..., vₖ]. Vertices have
    /// an empty boundary.
    pub fn faces(&self) -> impl Iterator<Item = Vec<Vertex>> + '_ {
        let n = if self.vertices.len() > 1 { self.vertices.len() } else { 0 };
        (0..n).map(move |skip| {
            self.vertices
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .map(|(_, &v)| v)
                .collect()
        })
    }

    /// Whether `other` is a proper face of this simplex
    pub fn has_face(&self, other: &Simplex) -> bool {
        other.vertices.len() < self.vertices.len()
            && other.vertices.iter().all(|v| self.vertices.binary_search(v).is_ok())
    }
}

impl PartialEq for Simplex {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

impl Eq for Simplex {}

impl Hash for Simplex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.vertices.hash(state);
    }
}

/// Dimension first, then lexicographic on the vertex set.
///
/// This is the last tie-break of every filtration comparator.
impl Ord for Simplex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dimension()
            .cmp(&other.dimension())
            .then_with(|| self.vertices.cmp(&other.vertices))
    }
}

impl PartialOrd for Simplex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Simplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "}} ({})", self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_and_canonical_order() {
        let s = Simplex::new([2, 0, 1], 0.5).unwrap();
        assert_eq!(s.dimension(), 2);
        assert_eq!(s.vertices(), &[0, 1, 2]);
        assert_eq!(Simplex::vertex(3, 0.0).dimension(), 0);
    }

    #[test]
    fn test_equality_ignores_data() {
        assert_eq!(Simplex::edge(0, 1, 0.5), Simplex::edge(1, 0, -3.0));
        assert_ne!(Simplex::edge(0, 1, 0.5), Simplex::edge(0, 2, 0.5));
    }

    #[test]
    fn test_faces() {
        let t = Simplex::new([0, 1, 2], 1.0).unwrap();
        let faces: Vec<_> = t.faces().collect();
        assert_eq!(faces, vec![vec![1, 2], vec![0, 2], vec![0, 1]]);
        assert_eq!(Simplex::vertex(0, 0.0).faces().count(), 0);
        assert!(t.has_face(&Simplex::edge(0, 2, 0.0)));
        assert!(!t.has_face(&t.clone()));
    }

    #[test]
    fn test_empty_vertex_set_rejected() {
        assert!(matches!(Simplex::new([], 1.0), Err(TopologyError::EmptySimplex)));
        assert_eq!(Simplex::new([4, 4], 1.0).unwrap().vertices(), &[4]);
    }

    #[test]
    fn test_deserialize_canonicalizes() {
        let s: Simplex = serde_json::from_str(r#"{"vertices": [1, 0]}"#).unwrap();
        assert_eq!(s.vertices(), &[0, 1]);
        assert_eq!(s.data(), 0.0);

        let k = crate::topology::SimplicialComplex::from_simplices([s]);
        assert_eq!(k.index_of(&[0, 1]), Some(0));

        let empty = serde_json::from_str::<Simplex>(r#"{"vertices": [], "data": 2.0}"#);
        assert!(empty.is_err());
    }

    #[test]
    fn test_lower_dimension_sorts_first() {
        let v = Simplex::vertex(5, 0.0);
        let e = Simplex::edge(0, 1, 0.0);
        assert!(v < e);
        assert!(Simplex::edge(0, 1, 0.0) < Simplex::edge(0, 2, 0.0));
    }
}
