//! # TDA-Persistence-Engine
//!
//! Persistent Homology of Filtered Simplicial Complexes over GF(2)
//!
//! ## Theoretical Framework
//!
//! A filtration orders the simplices of a complex so that every face
//! appears before its cofaces. Reducing the boundary matrix of that order
//! pairs each simplex that creates a homology class with the simplex that
//! destroys it. Reading the pairs against the simplex weights gives one
//! persistence diagram per dimension.
//!
//! ### Methodology
//!
//! 1. **Complexes and filtrations**: Simplices carry a scalar weight; the
//!    standard filtration sorts by weight, the absolute filtration by
//!    magnitude. Ties are broken by dimension so faces stay first.
//!
//! 2. **Boundary matrices**: Column-oriented GF(2) matrices over
//!    interchangeable column stores (sorted vectors, ordered sets, lazy
//!    heaps, bitsets). A matrix can be dualized into its coboundary matrix.
//!
//! 3. **Reduction**: The standard algorithm and the twist algorithm, which
//!    clears columns that are known to reduce to zero.
//!
//! 4. **Diagrams**: Extraction, diagonal removal, essential class handling,
//!    norms, persistent entropy and Betti numbers.
//!
//! 5. **Graph analysis**: Edge-weighted graphs with vertex weights derived
//!    from their edges, normalized and summarized by a diagram p-norm,
//!    optionally in parallel over many graphs.
//!
//! ## Example
//!
//! ```
//! use tda_persistence::{calculate_persistence_diagrams, Point, Simplex, SimplicialComplex};
//!
//! let k = SimplicialComplex::from_simplices([
//!     Simplex::vertex(0, 0.1),
//!     Simplex::vertex(1, 0.2),
//!     Simplex::edge(0, 1, 0.5),
//! ]);
//! let diagrams = calculate_persistence_diagrams(&k).unwrap();
//! assert_eq!(diagrams[0].points(), &[Point::unpaired(0.1), Point::new(0.2, 0.5)]);
//! ```
//!
//! ## References
//!
//! - Edelsbrunner & Harer, "Computational Topology" (2010)
//! - Zomorodian & Carlsson, "Computing Persistent Homology" (2005)
//! - Chen & Kerber, "Persistent Homology Computation with a Twist" (2011)
//! - de Silva, Morozov & Vejdemo-Johansson, "Dualities in Persistent
//!   (Co)homology" (2011)

pub mod analysis;
pub mod diagram;
pub mod error;
pub mod matrix;
pub mod reduction;
pub mod topology;

pub use error::{Result, TopologyError};

// Re-exports from topology
pub use topology::{
    // Complex construction
    Simplex,
    SimplicialComplex,
    Vertex,
    VietorisRips,
    // Ordering
    Filtration,
    // Graphs
    from_bipartite_adjacency,
    from_edge_list,
    random_stratified_graph,
};

// Re-exports from matrix and reduction
pub use matrix::{
    BitColumns,
    BoundaryMatrix,
    HeapColumns,
    Orientation,
    Representation,
    SetColumns,
    VectorColumns,
};
pub use reduction::{PersistencePairing, Reduction};

// Re-exports from diagram
pub use diagram::{
    calculate_persistence_diagrams,
    extract_diagrams,
    p_norm,
    BettiNumbers,
    Calculation,
    PersistenceDiagram,
    Point,
};

// Re-exports from analysis
pub use analysis::{analyze, analyze_batch, AnalysisConfig, AnalysisResult};
