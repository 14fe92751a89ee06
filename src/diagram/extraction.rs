//! Diagram extraction from a reduced boundary matrix
//!
//! ## Algorithm Overview
//!
//! 1. Check that the complex is in filtration order (faces first)
//! 2. Materialize its boundary matrix in the chosen column store
//! 3. Reduce the matrix (optionally in coboundary orientation)
//! 4. Turn every pair (i, j) into the point (w(i), w(j)) of dimension
//!    dim(i), and every unpaired simplex i into (w(i), +∞)

use super::persistence_diagram::{PersistenceDiagram, Point};
use crate::error::Result;
use crate::matrix::{BoundaryMatrix, Representation, VectorColumns};
use crate::reduction::{PersistencePairing, Reduction};
use crate::topology::SimplicialComplex;
use tracing::debug;

/// How to reduce: column store, algorithm and matrix orientation
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculation {
    pub algorithm: Reduction,
    /// Reduce the coboundary matrix instead of the boundary matrix
    pub dualize: bool,
}

impl Calculation {
    pub fn new(algorithm: Reduction, dualize: bool) -> Self {
        Self { algorithm, dualize }
    }

    /// Pair the simplices of `complex` using column store `R`.
    ///
    /// Weights have to be finite, since `+∞` marks classes that never die.
    pub fn pairing<R: Representation>(&self, complex: &SimplicialComplex) -> Result<PersistencePairing> {
        complex.check_filtration_order()?;
        complex.check_finite_weights()?;

        let matrix: BoundaryMatrix<R> = BoundaryMatrix::from_complex(complex)?;
        let mut matrix = if self.dualize { matrix.dualize() } else { matrix };
        self.algorithm.reduce(&mut matrix)
    }

    /// Persistence diagrams of `complex` using column store `R`.
    pub fn diagrams<R: Representation>(&self, complex: &SimplicialComplex) -> Result<Vec<PersistenceDiagram>> {
        let pairing = self.pairing::<R>(complex)?;
        Ok(extract_diagrams(complex, &pairing))
    }
}

/// Persistence diagrams of a complex in filtration order, one per
/// dimension `0..=complex.dimension()`.
///
/// Uses sorted-vector columns and the standard algorithm.
pub fn calculate_persistence_diagrams(complex: &SimplicialComplex) -> Result<Vec<PersistenceDiagram>> {
    Calculation::default().diagrams::<VectorColumns>(complex)
}

/// Convert a pairing into diagrams using the complex's weights.
///
/// Points are emitted in filtration order of their creator simplex.
/// Diagonal points are kept; see [`PersistenceDiagram::remove_diagonal`].
pub fn extract_diagrams(complex: &SimplicialComplex, pairing: &PersistencePairing) -> Vec<PersistenceDiagram> {
    let mut diagrams: Vec<PersistenceDiagram> = if complex.is_empty() {
        Vec::new()
    } else {
        (0..=complex.dimension()).map(PersistenceDiagram::new).collect()
    };

    for (i, simplex) in complex.iter().enumerate() {
        let point = match pairing.partner(i) {
            Some(j) if j > i => match complex.get(j) {
                Some(killer) => Point::new(simplex.data(), killer.data()),
                None => continue,
            },
            Some(_) => continue,
            None => Point::unpaired(simplex.data()),
        };
        diagrams[simplex.dimension()].push(point);
    }

    debug!(
        simplices = complex.len(),
        pairs = pairing.pairs().len(),
        diagrams = diagrams.len(),
        "extracted persistence diagrams"
    );

    diagrams
}
