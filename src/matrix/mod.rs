//! Boundary Matrix: column-oriented GF(2) matrices
//!
//! Column j of the boundary matrix holds the filtration indices of the
//! codimension-1 faces of simplex j. In a valid filtration every face
//! precedes its cofaces, so the matrix is strictly upper-triangular. Column
//! additions during reduction only ever add columns with a matching pivot,
//! which keeps it that way.
//!
//! ## Orientation
//!
//! A matrix is either a [`Orientation::Boundary`] matrix or the
//! [`Orientation::Coboundary`] matrix obtained from it by
//! [`BoundaryMatrix::dualize`] (anti-transposition: entry (i, j) moves to
//! (n-1-j, n-1-i)). The orientation is fixed when the matrix is built and
//! decides how reduction pairs are mapped back to filtration indices.

mod representation;

pub use representation::{
    BitColumns,
    HeapColumns,
    Index,
    Representation,
    SetColumns,
    VectorColumns,
};

use crate::error::{Result, TopologyError};
use crate::topology::SimplicialComplex;
use serde::{Deserialize, Serialize};

/// Which of the two matrices of a filtration a [`BoundaryMatrix`] stores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Columns are boundaries, indexed in filtration order
    #[default]
    Boundary,
    /// Columns are coboundaries, indexed in reverse filtration order
    Coboundary,
}

impl Orientation {
    /// Map a column index of a matrix with `n` columns to the filtration
    /// index of its simplex.
    pub fn filtration_index(self, index: Index, n: usize) -> Index {
        match self {
            Orientation::Boundary => index,
            Orientation::Coboundary => n - 1 - index,
        }
    }

    /// Turn a reduction pivot (`row` claimed by `column`) into a
    /// `(birth, death)` pair of filtration indices.
    pub fn pair(self, row: Index, column: Index, n: usize) -> (Index, Index) {
        match self {
            Orientation::Boundary => (row, column),
            Orientation::Coboundary => (n - 1 - column, n - 1 - row),
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Orientation::Boundary => Orientation::Coboundary,
            Orientation::Coboundary => Orientation::Boundary,
        }
    }
}

/// Upper-triangular GF(2) matrix over a swappable column store
#[derive(Debug, Clone)]
pub struct BoundaryMatrix<R: Representation = VectorColumns> {
    columns: R,
    dimensions: Vec<usize>,
    orientation: Orientation,
}

impl<R: Representation> Default for BoundaryMatrix<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Representation> BoundaryMatrix<R> {
    /// Empty boundary matrix
    pub fn new() -> Self {
        Self {
            columns: R::default(),
            dimensions: Vec::new(),
            orientation: Orientation::Boundary,
        }
    }

    /// Boundary matrix with `n` zero columns
    pub fn with_columns(n: usize) -> Self {
        let mut matrix = Self::new();
        matrix.set_num_columns(n);
        matrix
    }

    /// Materialize the boundary matrix of a complex in its current order.
    ///
    /// Fails with [`TopologyError::MissingFace`] if a face is not part of
    /// the complex and with [`TopologyError::OrderViolation`] if a face
    /// comes after its coface.
    pub fn from_complex(complex: &SimplicialComplex) -> Result<Self> {
        let mut matrix = Self::with_columns(complex.len());
        for j in 0..complex.len() {
            matrix.set_column(j, complex.boundary_indices(j)?)?;
        }
        Ok(matrix)
    }

    /// (Re)size to `n` zero columns of dimension 0.
    pub fn set_num_columns(&mut self, n: usize) {
        self.columns.set_num_columns(n);
        self.dimensions = vec![0; n];
    }

    pub fn num_columns(&self) -> usize {
        self.columns.num_columns()
    }

    /// Assign the face indices of column `j`.
    ///
    /// Indices are sorted; repeated indices cancel in pairs (GF(2)). Every
    /// index has to be smaller than `j`. The column dimension becomes
    /// `count - 1`, or 0 for an empty column.
    pub fn set_column(&mut self, j: Index, faces: impl IntoIterator<Item = Index>) -> Result<()> {
        self.check(j)?;
        let entries = canonical_entries(faces);

        if let Some(&row) = entries.last() {
            if row >= j {
                return Err(TopologyError::OrderViolation { column: j, row });
            }
        }

        self.dimensions[j] = entries.len().saturating_sub(1);
        self.columns.set_column(j, &entries);
        Ok(())
    }

    /// Non-zero rows of column `j`, ascending
    pub fn column(&self, j: Index) -> Result<Vec<Index>> {
        self.check(j)?;
        Ok(self.columns.column(j))
    }

    pub fn clear_column(&mut self, j: Index) -> Result<()> {
        self.check(j)?;
        self.columns.clear_column(j);
        Ok(())
    }

    /// Pivot ("low") of column `j`, `None` for a zero column
    pub fn maximum_index(&self, j: Index) -> Result<Option<Index>> {
        self.check(j)?;
        Ok(self.columns.max_index(j))
    }

    /// Replace column `target` by the GF(2) sum of `source` and `target`.
    pub fn add_columns(&mut self, source: Index, target: Index) -> Result<()> {
        self.check(source)?;
        self.check(target)?;
        self.columns.add_columns(source, target);
        Ok(())
    }

    /// Dimension of the simplex behind column `j`
    pub fn dimension(&self, j: Index) -> Result<usize> {
        self.check(j)?;
        Ok(self.dimensions[j])
    }

    /// Highest column dimension, 0 for an empty matrix
    pub fn max_dimension(&self) -> usize {
        self.dimensions.iter().copied().max().unwrap_or(0)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_dualized(&self) -> bool {
        self.orientation == Orientation::Coboundary
    }

    /// Anti-transpose into the matrix of the opposite orientation.
    ///
    /// Column c of the result corresponds to simplex n-1-c; its dimension
    /// becomes `max_dimension() - dim`, so the highest-dimensional simplices
    /// come first. Dualizing twice restores the original columns.
    pub fn dualize(&self) -> Self {
        let n = self.num_columns();
        let max_dim = self.max_dimension();

        let mut dual_entries: Vec<Vec<Index>> = vec![Vec::new(); n];
        for j in 0..n {
            for i in self.columns.column(j) {
                dual_entries[n - 1 - i].push(n - 1 - j);
            }
        }

        let mut dual = Self {
            columns: R::default(),
            dimensions: vec![0; n],
            orientation: self.orientation.flipped(),
        };
        dual.columns.set_num_columns(n);

        for (c, mut entries) in dual_entries.into_iter().enumerate() {
            entries.sort_unstable();
            dual.columns.set_column(c, &entries);
            dual.dimensions[c] = max_dim - self.dimensions[n - 1 - c];
        }
        dual
    }

    /// Check that this is the matrix of a chain complex over GF(2).
    ///
    /// Every entry of a column of dimension d must be a row of dimension
    /// d - 1, and every column must have a zero boundary (∂∂ = 0). The
    /// twist algorithm relies on both; matrices built by
    /// [`from_complex`](Self::from_complex) and their duals satisfy them.
    pub fn check_chain_complex(&self) -> Result<()> {
        for j in 0..self.num_columns() {
            let rows = self.columns.column(j);
            if rows.iter().any(|&i| self.dimensions[i] + 1 != self.dimensions[j]) {
                return Err(TopologyError::NotABoundary {
                    column: j,
                    reason: "entry dimensions do not match the column dimension",
                });
            }

            // Every face of the boundary has to occur an even number of times
            let mut faces: Vec<Index> = rows.iter().flat_map(|&i| self.columns.column(i)).collect();
            faces.sort_unstable();
            if faces.chunks(2).any(|pair| pair.len() == 1 || pair[0] != pair[1]) {
                return Err(TopologyError::NotABoundary {
                    column: j,
                    reason: "boundary of the column is not zero",
                });
            }
        }
        Ok(())
    }

    fn check(&self, j: Index) -> Result<()> {
        let len = self.num_columns();
        if j < len {
            Ok(())
        } else {
            Err(TopologyError::InvalidIndex { index: j, len })
        }
    }
}

/// Sort and cancel repeated indices in pairs.
fn canonical_entries(faces: impl IntoIterator<Item = Index>) -> Vec<Index> {
    let mut sorted: Vec<Index> = faces.into_iter().collect();
    sorted.sort_unstable();

    let mut entries: Vec<Index> = Vec::with_capacity(sorted.len());
    for idx in sorted {
        if entries.last() == Some(&idx) {
            entries.pop();
        } else {
            entries.push(idx);
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::Simplex;

    fn single_edge() -> SimplicialComplex {
        SimplicialComplex::from_simplices([
            Simplex::vertex(0, 0.1),
            Simplex::vertex(1, 0.2),
            Simplex::edge(0, 1, 0.5),
        ])
    }

    #[test]
    fn test_from_complex() {
        let m: BoundaryMatrix = BoundaryMatrix::from_complex(&single_edge()).unwrap();
        assert_eq!(m.num_columns(), 3);
        assert_eq!(m.column(2).unwrap(), vec![0, 1]);
        assert_eq!(m.maximum_index(2).unwrap(), Some(1));
        assert_eq!(m.maximum_index(0).unwrap(), None);
        assert_eq!(m.dimension(2).unwrap(), 1);
        assert_eq!(m.dimension(0).unwrap(), 0);
        assert_eq!(m.max_dimension(), 1);
    }

    #[test]
    fn test_invalid_index() {
        let mut m: BoundaryMatrix<SetColumns> = BoundaryMatrix::with_columns(2);
        assert!(matches!(m.column(2), Err(TopologyError::InvalidIndex { index: 2, len: 2 })));
        assert!(matches!(m.add_columns(0, 5), Err(TopologyError::InvalidIndex { index: 5, .. })));
        assert!(matches!(m.set_column(9, [0]), Err(TopologyError::InvalidIndex { .. })));
        assert!(m.maximum_index(3).is_err());
        assert!(m.clear_column(3).is_err());
    }

    #[test]
    fn test_set_column_normalizes_and_checks_order() {
        let mut m: BoundaryMatrix = BoundaryMatrix::with_columns(6);
        m.set_column(5, [3, 0, 2]).unwrap();
        assert_eq!(m.column(5).unwrap(), vec![0, 2, 3]);
        assert_eq!(m.dimension(5).unwrap(), 2);

        m.set_column(4, [1, 3, 1]).unwrap();
        assert_eq!(m.column(4).unwrap(), vec![3]);

        let err = m.set_column(2, [0, 2]).unwrap_err();
        assert!(matches!(err, TopologyError::OrderViolation { column: 2, row: 2 }));
    }

    #[test]
    fn test_add_columns_is_self_inverse() {
        let mut m: BoundaryMatrix = BoundaryMatrix::with_columns(6);
        m.set_column(4, [0, 1, 3]).unwrap();
        m.set_column(5, [1, 2]).unwrap();
        let before = m.column(5).unwrap();
        m.add_columns(4, 5).unwrap();
        assert_eq!(m.column(5).unwrap(), vec![0, 2, 3]);
        m.add_columns(4, 5).unwrap();
        assert_eq!(m.column(5).unwrap(), before);
    }

    #[test]
    fn test_dualize_round_trip() {
        let m: BoundaryMatrix<HeapColumns> = BoundaryMatrix::from_complex(&single_edge()).unwrap();
        let d = m.dualize();
        assert!(d.is_dualized());
        // edge is column 0 of the dual, its cofaces (none) are empty;
        // vertex 1 becomes column 1 with coboundary {edge}
        assert_eq!(d.column(0).unwrap(), Vec::<Index>::new());
        assert_eq!(d.column(1).unwrap(), vec![0]);
        assert_eq!(d.column(2).unwrap(), vec![0]);
        assert_eq!(d.dimension(0).unwrap(), 0);
        assert_eq!(d.dimension(2).unwrap(), 1);

        let back = d.dualize();
        assert!(!back.is_dualized());
        for j in 0..3 {
            assert_eq!(back.column(j).unwrap(), m.column(j).unwrap());
            assert_eq!(back.dimension(j).unwrap(), m.dimension(j).unwrap());
        }
    }

    #[test]
    fn test_orientation_pairs() {
        assert_eq!(Orientation::Boundary.pair(1, 2, 3), (1, 2));
        assert_eq!(Orientation::Coboundary.pair(0, 1, 3), (1, 2));
        assert_eq!(Orientation::Coboundary.filtration_index(0, 3), 2);
    }
}
