//! Diagram Norms: scalar summaries of a persistence diagram
//!
//! All summaries are stateless reductions over the points of one diagram.
//! Unpaired points have infinite persistence and are skipped; replace
//! their death first (see
//! [`PersistenceDiagram::replace_unpaired`](super::PersistenceDiagram::replace_unpaired))
//! to let them contribute.
//!
//! ## Persistent Entropy (Shannon)
//!
//!   H_P = -Σᵢ pᵢ log(pᵢ)
//!
//! where pᵢ = lᵢ / L, lᵢ = |dᵢ - bᵢ| is the lifetime of point i and
//! L = Σⱼ lⱼ is the total lifetime.

use super::persistence_diagram::PersistenceDiagram;

fn lifetimes(diagram: &PersistenceDiagram) -> impl Iterator<Item = f64> + '_ {
    diagram
        .iter()
        .filter(|p| !p.is_unpaired())
        .map(|p| (p.death - p.birth).abs())
}

/// Total persistence Σ |d - b|^p
pub fn total_persistence(diagram: &PersistenceDiagram, p: f64) -> f64 {
    lifetimes(diagram).map(|l| l.powf(p)).sum()
}

/// p-norm (Σ |d - b|^p)^(1/p)
pub fn p_norm(diagram: &PersistenceDiagram, p: f64) -> f64 {
    total_persistence(diagram, p).powf(1.0 / p)
}

/// Largest lifetime, 0 for a diagram without finite points
pub fn infinity_norm(diagram: &PersistenceDiagram) -> f64 {
    lifetimes(diagram).fold(0.0, f64::max)
}

/// Persistent (Shannon) entropy of the lifetimes
pub fn persistent_entropy(diagram: &PersistenceDiagram) -> f64 {
    let total: f64 = lifetimes(diagram).sum();
    if total <= 0.0 {
        return 0.0;
    }

    let mut entropy = 0.0;
    for l in lifetimes(diagram) {
        let p = l / total;
        if p > 0.0 {
            entropy -= p * p.ln();
        }
    }
    entropy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::Point;

    #[test]
    fn test_p_norm() {
        let d = PersistenceDiagram::from_points(1, [Point::new(0.0, 3.0), Point::new(1.0, 5.0), Point::unpaired(0.0)]);
        assert!((total_persistence(&d, 2.0) - 25.0).abs() < 1e-10);
        assert!((p_norm(&d, 2.0) - 5.0).abs() < 1e-10);
        assert!((p_norm(&d, 1.0) - 7.0).abs() < 1e-10);
        assert!((infinity_norm(&d) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_negative_orientation_counts_by_magnitude() {
        // reversed filtrations produce death < birth
        let d = PersistenceDiagram::from_points(0, [Point::new(0.9, 0.4)]);
        assert!((p_norm(&d, 2.0) - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_entropy_uniform() {
        // Three intervals with equal lifetime
        let d = PersistenceDiagram::from_points(0, [Point::new(0.0, 1.0); 3]);
        let expected = 3.0_f64.ln();
        assert!((persistent_entropy(&d) - expected).abs() < 0.01);
    }

    #[test]
    fn test_entropy_single() {
        // Single interval has zero entropy
        let d = PersistenceDiagram::from_points(0, [Point::new(0.0, 1.0)]);
        assert_eq!(persistent_entropy(&d), 0.0);
        assert_eq!(persistent_entropy(&PersistenceDiagram::new(0)), 0.0);
    }
}
