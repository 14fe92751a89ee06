//! Diagram Module: Persistence Diagrams and their Summaries
//!
//! Converts a persistence pairing plus the original simplex weights into
//! one persistence diagram per dimension, and provides the
//! post-processing and scalar summaries applied to diagrams:
//! - diagonal and unpaired point handling
//! - merging diagrams of equal dimension
//! - p-norms, total persistence and persistent entropy
//! - Betti numbers and curves
//!
//! Diagrams are plain values; they keep no reference to the matrix or
//! complex they were extracted from.

mod betti;
mod extraction;
mod norms;
mod persistence_diagram;

pub use betti::{BettiCurve, BettiNumbers};
pub use extraction::{calculate_persistence_diagrams, extract_diagrams, Calculation};
pub use norms::{infinity_norm, p_norm, persistent_entropy, total_persistence};
pub use persistence_diagram::{PersistenceDiagram, Point};
