//! Vertex weight assignment
//!
//! Graph inputs only carry meaningful weights on their edges. Before the
//! final filtration sort, vertex weights are recomputed from the edges so
//! that every vertex enters the filtration no later than its first edge.
//! The complex is expected to be sorted by the same filtration already.

use super::config::VertexWeights;
use crate::error::Result;
use crate::topology::{Filtration, Simplex, SimplicialComplex, Vertex};
use std::collections::HashMap;
use tracing::debug;

/// Copy of `complex` with recomputed vertex weights.
///
/// - [`VertexWeights::Global`]: every vertex, incident to an edge or not,
///   gets the extremal edge weight of the filtration (smallest, or largest
///   when reversed; by magnitude for [`Filtration::Absolute`]).
/// - [`VertexWeights::Local`]: every vertex gets the weight of the first
///   incident edge in the current order. Isolated vertices keep theirs.
///
/// Without edges the complex is returned unchanged. Positions never
/// change; weights are written through
/// [`SimplicialComplex::replace`].
pub fn assign_vertex_weights(
    complex: &SimplicialComplex,
    filtration: Filtration,
    strategy: VertexWeights,
    reverse: bool,
) -> Result<SimplicialComplex> {
    let edges = complex.iter().filter(|s| s.dimension() == 1);

    let mut weight: HashMap<Vertex, f64> = HashMap::new();
    match strategy {
        VertexWeights::Global => {
            let extremal = edges
                .map(Simplex::data)
                .reduce(|a, b| if filtration.precedes(reverse, b, a) { b } else { a });

            // Same value for every vertex, incident or not
            if let Some(w) = extremal {
                for s in complex.iter().filter(|s| s.dimension() == 0) {
                    weight.insert(s.vertices()[0], w);
                }
            }
        }
        VertexWeights::Local => {
            for edge in edges {
                for &v in edge.vertices() {
                    weight.entry(v).or_insert(edge.data());
                }
            }
        }
    }

    let mut result = complex.clone();
    for (position, s) in complex.iter().enumerate() {
        if s.dimension() != 0 {
            continue;
        }
        if let Some(&w) = weight.get(&s.vertices()[0]) {
            result.replace(position, s.with_data(w))?;
        }
    }

    debug!(
        strategy = ?strategy,
        filtration = %filtration,
        reverse,
        updated = weight.len(),
        "assigned vertex weights"
    );

    Ok(result)
}
