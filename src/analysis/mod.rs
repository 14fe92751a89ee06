//! Analysis Module: Persistence of Weighted Graphs
//!
//! End-to-end analysis of edge-weighted graphs, the typical input being
//! layered networks whose edges carry signed weights:
//!
//! 1. Optional weight normalization (absolute, min-max, standardization)
//! 2. Sorting by the configured filtration
//! 3. Vertex weight assignment from the incident edges
//! 4. Reduction and diagram post-processing
//! 5. A p-norm summary per graph
//!
//! Many graphs can be processed in parallel with [`analyze_batch`].

mod config;
mod normalization;
mod pipeline;
mod weights;

pub use config::{AnalysisConfig, Normalization, VertexWeights};
pub use normalization::{data_range, normalize_complex, normalize_diagram};
pub use pipeline::{analyze, analyze_batch, analyze_with, prepare, AnalysisResult};
pub use weights::assign_vertex_weights;
