//! Filtration orders
//!
//! A filtration order is a comparator over simplices. All comparators here
//! break weight ties by dimension (lower first) and then lexicographically,
//! so a face sharing its coface's weight still sorts before it. Without
//! that tie-break the boundary matrix stops being upper-triangular.

use super::complex::SimplicialComplex;
use super::simplex::Simplex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Weight-based filtration policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filtration {
    /// Sort by signed weight
    #[default]
    Standard,
    /// Sort by absolute weight; among equal magnitudes negative weights
    /// come first (last when reversed)
    Absolute,
}

impl Filtration {
    /// Compare two simplices under this policy.
    ///
    /// `reverse` flips the weight comparison only, never the dimension
    /// tie-break.
    pub fn compare(self, reverse: bool, s: &Simplex, t: &Simplex) -> Ordering {
        let by_weight = match self {
            Filtration::Standard => s.data().total_cmp(&t.data()),
            Filtration::Absolute => s
                .data()
                .abs()
                .total_cmp(&t.data().abs())
                .then_with(|| s.data().total_cmp(&t.data())),
        };
        let by_weight = if reverse { by_weight.reverse() } else { by_weight };
        by_weight.then_with(|| s.cmp(t))
    }

    /// Comparator closure for [`SimplicialComplex::sort_by`]
    pub fn comparator(self, reverse: bool) -> impl Fn(&Simplex, &Simplex) -> Ordering {
        move |s, t| self.compare(reverse, s, t)
    }

    /// Sort a complex in place into this filtration order.
    pub fn apply(self, complex: &mut SimplicialComplex, reverse: bool) {
        complex.sort_by(self.comparator(reverse));
    }

    /// Whether `a` is more extremal than `b` in the sense of this policy:
    /// smaller (or larger when reversed) weight, by magnitude for
    /// [`Filtration::Absolute`].
    pub(crate) fn precedes(self, reverse: bool, a: f64, b: f64) -> bool {
        let key = |w: f64| match self {
            Filtration::Standard => w,
            Filtration::Absolute => w.abs(),
        };
        if reverse {
            key(a) > key(b)
        } else {
            key(a) < key(b)
        }
    }
}

impl fmt::Display for Filtration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filtration::Standard => write!(f, "standard"),
            Filtration::Absolute => write!(f, "absolute"),
        }
    }
}

impl FromStr for Filtration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Filtration::Standard),
            "absolute" => Ok(Filtration::Absolute),
            other => Err(format!("unknown filtration '{}'", other)),
        }
    }
}
