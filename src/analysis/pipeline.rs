//! Graph persistence pipeline
//!
//! normalize weights → sort → assign vertex weights → sort → reduce →
//! post-process the top-dimensional diagram → p-norm

use super::config::AnalysisConfig;
use super::normalization::{data_range, normalize_complex, normalize_diagram};
use super::weights::assign_vertex_weights;
use crate::diagram::{p_norm, Calculation, PersistenceDiagram, Point};
use crate::error::Result;
use crate::matrix::{Representation, VectorColumns};
use crate::topology::{min_absolute_edge_weight, Filtration, SimplicialComplex};
use rayon::prelude::*;
use tracing::{info, warn};

/// Outcome of analyzing a single complex
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// Post-processed diagram of the highest dimension
    pub diagram: PersistenceDiagram,
    /// p-norm of `diagram`
    pub norm: f64,
}

impl AnalysisResult {
    /// Output record for the graph at `index`.
    ///
    /// Either `index<TAB>norm`, or with `diagrams` a `# index` header
    /// followed by the diagram in its text form, which
    /// [`PersistenceDiagram::from_text`] reads back.
    pub fn report(&self, index: usize, diagrams: bool) -> String {
        if diagrams {
            format!("# {}\n{}", index, self.diagram)
        } else {
            format!("{}\t{:.6}\n", index, self.norm)
        }
    }
}

/// Weighted, sorted copy of `complex` ready for reduction.
pub fn prepare(complex: &SimplicialComplex, config: &AnalysisConfig) -> Result<SimplicialComplex> {
    let mut k = complex.clone();
    if let Some(normalization) = config.normalization {
        normalize_complex(&mut k, normalization)?;
    }

    config.filtration.apply(&mut k, config.reverse);
    let mut k = assign_vertex_weights(&k, config.filtration, config.weights, config.reverse)?;
    config.filtration.apply(&mut k, config.reverse);
    Ok(k)
}

/// Analyze one complex with sorted-vector columns.
pub fn analyze(complex: &SimplicialComplex, config: &AnalysisConfig) -> Result<AnalysisResult> {
    analyze_with::<VectorColumns>(complex, config)
}

/// Analyze one complex with column store `R`.
pub fn analyze_with<R: Representation>(complex: &SimplicialComplex, config: &AnalysisConfig) -> Result<AnalysisResult> {
    config.validate()?;
    let k = prepare(complex, config)?;

    let calculation = Calculation::new(config.algorithm, config.dualize);
    let mut diagram = calculation
        .diagrams::<R>(&k)?
        .pop()
        .unwrap_or_default();

    diagram.remove_diagonal();
    if let Some(w) = min_absolute_edge_weight(&k) {
        diagram.replace_unpaired(w);
    }
    if config.filtration == Filtration::Absolute {
        diagram.map_points(|p| Point::new(p.birth.abs(), p.death.abs()));
    }
    if config.normalize_diagram {
        if let Some((min, max)) = data_range(&k) {
            normalize_diagram(&mut diagram, min, max);
        }
    }

    let norm = p_norm(&diagram, config.p);
    info!(
        simplices = k.len(),
        dimension = diagram.dimension(),
        points = diagram.len(),
        norm,
        "analyzed complex"
    );

    Ok(AnalysisResult { diagram, norm })
}

/// Analyze many complexes in parallel.
///
/// Results keep the input order; a failing complex does not affect the
/// others.
pub fn analyze_batch(complexes: &[SimplicialComplex], config: &AnalysisConfig) -> Vec<Result<AnalysisResult>> {
    complexes
        .par_iter()
        .enumerate()
        .map(|(index, k)| {
            let result = analyze(k, config);
            if let Err(e) = &result {
                warn!(index, error = %e, "analysis failed");
            }
            result
        })
        .collect()
}
