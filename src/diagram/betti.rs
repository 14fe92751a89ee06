//! Betti Numbers: Topological Invariants
//!
//! The k-th Betti number βₖ counts the number of k-dimensional
//! "holes" in a topological space:
//!
//! - β₀: Number of connected components
//! - β₁: Number of 1-dimensional loops/cycles
//! - β₂: Number of 2-dimensional voids/cavities
//!
//! Read off a set of diagrams of an ascending filtration: βₖ(t) is the
//! number of points of dimension k with birth ≤ t < death.

use super::persistence_diagram::PersistenceDiagram;

/// Betti numbers at a specific filtration value
#[derive(Debug, Clone, PartialEq)]
pub struct BettiNumbers {
    /// βₖ for k = 0, 1, ...
    pub values: Vec<usize>,
    /// Filtration value
    pub epsilon: f64,
}

impl BettiNumbers {
    /// Betti numbers of the complex at filtration value `epsilon`.
    ///
    /// `diagrams[k]` has to be the diagram of dimension k.
    pub fn at(diagrams: &[PersistenceDiagram], epsilon: f64) -> Self {
        let values = diagrams
            .iter()
            .map(|d| {
                d.iter()
                    .filter(|p| p.birth <= epsilon && epsilon < p.death)
                    .count()
            })
            .collect();

        Self { values, epsilon }
    }

    /// βₖ, 0 beyond the highest dimension
    pub fn beta(&self, k: usize) -> usize {
        self.values.get(k).copied().unwrap_or(0)
    }

    /// Total topological complexity
    pub fn total(&self) -> usize {
        self.values.iter().sum()
    }

    /// Euler characteristic χ = β₀ - β₁ + β₂ - ...
    pub fn euler_characteristic(&self) -> i64 {
        self.values
            .iter()
            .enumerate()
            .map(|(k, &b)| if k % 2 == 0 { b as i64 } else { -(b as i64) })
            .sum()
    }
}

/// Betti curve: sequence of Betti numbers across filtration
#[derive(Debug, Clone)]
pub struct BettiCurve {
    pub values: Vec<BettiNumbers>,
}

impl BettiCurve {
    /// Sample Betti numbers at `n_steps + 1` evenly spaced values in
    /// `[min_epsilon, max_epsilon]`.
    pub fn compute(diagrams: &[PersistenceDiagram], min_epsilon: f64, max_epsilon: f64, n_steps: usize) -> Self {
        let steps = n_steps.max(1);
        let values = (0..=steps)
            .map(|step| {
                let epsilon = min_epsilon + (max_epsilon - min_epsilon) * step as f64 / steps as f64;
                BettiNumbers::at(diagrams, epsilon)
            })
            .collect();

        Self { values }
    }

    /// βₖ curve as (ε, βₖ) samples
    pub fn curve(&self, k: usize) -> Vec<(f64, usize)> {
        self.values.iter().map(|b| (b.epsilon, b.beta(k))).collect()
    }

    /// Integrated βₖ (area under curve)
    pub fn integrated(&self, k: usize) -> f64 {
        if self.values.len() < 2 {
            return 0.0;
        }

        let mut integral = 0.0;
        for i in 1..self.values.len() {
            let de = self.values[i].epsilon - self.values[i - 1].epsilon;
            let avg = (self.values[i].beta(k) + self.values[i - 1].beta(k)) as f64 / 2.0;
            integral += de * avg;
        }
        integral
    }
}
