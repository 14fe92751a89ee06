//! Simplicial Complex: ordered, identity-indexed simplex store
//!
//! The complex owns its simplices in an indexed arena. The position of a
//! simplex in the arena is its filtration index, which later becomes its
//! row/column index in the boundary matrix. A hash index maps every vertex
//! set to its current position, so face lookups during matrix construction
//! are O(1) amortized.
//!
//! Positions only change on [`SimplicialComplex::sort_by`]. Weight updates
//! go through [`SimplicialComplex::replace`], which overwrites the payload in
//! place and never moves a simplex.

use super::simplex::{Simplex, Vertex};
use crate::error::{Result, TopologyError};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

/// Ordered collection of simplices, unique by vertex set
#[derive(Debug, Clone, Default)]
pub struct SimplicialComplex {
    simplices: Vec<Simplex>,
    index: HashMap<Vec<Vertex>, usize>,
}

impl SimplicialComplex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a complex from simplices in the given order.
    ///
    /// Later occurrences of an already present vertex set are ignored.
    pub fn from_simplices(simplices: impl IntoIterator<Item = Simplex>) -> Self {
        let mut complex = Self::new();
        for s in simplices {
            complex.push(s);
        }
        complex
    }

    /// Append a simplex at the end of the current order.
    ///
    /// Returns `false` (and leaves the complex untouched) if a simplex with
    /// the same vertex set is already present.
    pub fn push(&mut self, simplex: Simplex) -> bool {
        if self.index.contains_key(simplex.vertices()) {
            return false;
        }
        self.index.insert(simplex.vertices().to_vec(), self.simplices.len());
        self.simplices.push(simplex);
        true
    }

    pub fn len(&self) -> usize {
        self.simplices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.simplices.is_empty()
    }

    /// Iterate in current (filtration) order
    pub fn iter(&self) -> std::slice::Iter<'_, Simplex> {
        self.simplices.iter()
    }

    pub fn get(&self, position: usize) -> Option<&Simplex> {
        self.simplices.get(position)
    }

    /// Current position of the simplex with the given vertex set.
    ///
    /// `vertices` has to be sorted ascending, as returned by
    /// [`Simplex::vertices`] and [`Simplex::faces`].
    pub fn index_of(&self, vertices: &[Vertex]) -> Option<usize> {
        self.index.get(vertices).copied()
    }

    pub fn contains(&self, simplex: &Simplex) -> bool {
        self.index.contains_key(simplex.vertices())
    }

    /// Highest simplex dimension, 0 for an empty complex
    pub fn dimension(&self) -> usize {
        self.simplices.iter().map(Simplex::dimension).max().unwrap_or(0)
    }

    /// Re-order in place by a comparator.
    ///
    /// The comparator has to describe a valid filtration (faces before
    /// cofaces); this is not checked here, see
    /// [`SimplicialComplex::check_filtration_order`].
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Simplex, &Simplex) -> Ordering,
    {
        self.simplices.sort_by(compare);
        self.rebuild_index();
    }

    /// Overwrite the simplex at `position` with one sharing its vertex set.
    ///
    /// Fails with [`TopologyError::ReplacementMismatch`] if the vertex sets
    /// differ; the complex is unchanged in that case.
    pub fn replace(&mut self, position: usize, simplex: Simplex) -> Result<()> {
        let len = self.simplices.len();
        let slot = self
            .simplices
            .get_mut(position)
            .ok_or(TopologyError::InvalidIndex { index: position, len })?;

        if *slot != simplex {
            return Err(TopologyError::ReplacementMismatch {
                existing: slot.vertices().to_vec(),
                replacement: simplex.vertices().to_vec(),
            });
        }

        *slot = simplex;
        Ok(())
    }

    /// Set the weight of the simplex at `position` without moving it.
    pub fn set_data(&mut self, position: usize, data: f64) -> Result<()> {
        let len = self.simplices.len();
        self.simplices
            .get_mut(position)
            .ok_or(TopologyError::InvalidIndex { index: position, len })?
            .set_data(data);
        Ok(())
    }

    /// Positions of the codimension-1 faces of the simplex at `position`.
    pub fn boundary_indices(&self, position: usize) -> Result<Vec<usize>> {
        let simplex = self.simplices.get(position).ok_or(TopologyError::InvalidIndex {
            index: position,
            len: self.simplices.len(),
        })?;

        simplex
            .faces()
            .map(|face| {
                self.index_of(&face).ok_or_else(|| TopologyError::MissingFace {
                    simplex: simplex.vertices().to_vec(),
                    face,
                })
            })
            .collect()
    }

    /// Verify that every face precedes all of its cofaces.
    pub fn check_filtration_order(&self) -> Result<()> {
        for column in 0..self.simplices.len() {
            for row in self.boundary_indices(column)? {
                if row >= column {
                    return Err(TopologyError::OrderViolation { column, row });
                }
            }
        }
        Ok(())
    }

    /// Verify that every weight is finite.
    pub fn check_finite_weights(&self) -> Result<()> {
        match self.simplices.iter().position(|s| !s.data().is_finite()) {
            Some(position) => Err(TopologyError::NonFiniteWeight {
                position,
                value: self.simplices[position].data(),
            }),
            None => Ok(()),
        }
    }

    /// Consume the complex, yielding its simplices in order
    pub fn into_simplices(self) -> Vec<Simplex> {
        self.simplices
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for (i, s) in self.simplices.iter().enumerate() {
            self.index.insert(s.vertices().to_vec(), i);
        }
    }
}

impl FromIterator<Simplex> for SimplicialComplex {
    fn from_iter<I: IntoIterator<Item = Simplex>>(iter: I) -> Self {
        Self::from_simplices(iter)
    }
}

impl<'a> IntoIterator for &'a SimplicialComplex {
    type Item = &'a Simplex;
    type IntoIter = std::slice::Iter<'a, Simplex>;

    fn into_iter(self) -> Self::IntoIter {
        self.simplices.iter()
    }
}

impl fmt::Display for SimplicialComplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in &self.simplices {
            writeln!(f, "{}", s)?;
        }
        Ok(())
    }
}
