//! Persistence pairing: the outcome of a matrix reduction

use crate::matrix::Index;

/// Birth/death pairs of filtration indices, plus reduction statistics.
///
/// Every simplex index in `0..len()` is exactly one of: the birth of a
/// pair, the death of a pair, or unpaired (an essential class).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistencePairing {
    pairs: Vec<(Index, Index)>,
    partner: Vec<Option<Index>>,
    column_additions: usize,
}

impl PersistencePairing {
    /// Build from `(birth, death)` pairs over `n` simplices.
    ///
    /// Pairs are kept sorted by death index.
    pub(crate) fn new(mut pairs: Vec<(Index, Index)>, n: usize, column_additions: usize) -> Self {
        pairs.sort_unstable_by_key(|&(birth, death)| (death, birth));

        let mut partner = vec![None; n];
        for &(birth, death) in &pairs {
            partner[birth] = Some(death);
            partner[death] = Some(birth);
        }

        Self {
            pairs,
            partner,
            column_additions,
        }
    }

    /// `(birth, death)` pairs sorted by death index
    pub fn pairs(&self) -> &[(Index, Index)] {
        &self.pairs
    }

    /// Number of simplices the pairing covers
    pub fn len(&self) -> usize {
        self.partner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partner.is_empty()
    }

    /// Index paired with `index`, if any
    pub fn partner(&self, index: Index) -> Option<Index> {
        self.partner.get(index).copied().flatten()
    }

    pub fn is_paired(&self, index: Index) -> bool {
        self.partner(index).is_some()
    }

    /// Whether `index` creates a class (birth of a pair or unpaired)
    pub fn is_creator(&self, index: Index) -> bool {
        match self.partner(index) {
            Some(other) => other > index,
            None => index < self.len(),
        }
    }

    /// Indices that appear in no pair, ascending
    pub fn unpaired(&self) -> impl Iterator<Item = Index> + '_ {
        self.partner
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_none())
            .map(|(i, _)| i)
    }

    /// Number of `add_columns` calls the reduction performed
    pub fn column_additions(&self) -> usize {
        self.column_additions
    }
}
