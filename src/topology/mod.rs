//! Topology Module: Simplices, Complexes and Filtrations
//!
//! Implements the combinatorial side of persistent homology:
//! - Simplices with filtration values
//! - Simplicial complexes with stable, position-based indexing
//! - Filtration orders (comparators with a face-before-coface tie-break)
//! - Complex builders for graphs and Vietoris-Rips filtrations
//!
//! ## Mathematical Background
//!
//! A filtration is a nested sequence of complexes K₀ ⊆ K₁ ⊆ ... ⊆ Kₙ. Any
//! total order on the simplices in which every face precedes its cofaces
//! describes one; the position of a simplex in that order becomes its
//! row/column index in the boundary matrix.

mod complex;
mod filtration;
mod graph;
mod simplex;
mod vietoris_rips;

pub use complex::SimplicialComplex;
pub use filtration::Filtration;
pub use graph::{
    from_bipartite_adjacency,
    from_edge_list,
    min_absolute_edge_weight,
    random_stratified_graph,
};
pub use simplex::{Simplex, Vertex};
pub use vietoris_rips::{euclidean_distances, VietorisRips};
