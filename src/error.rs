//! Error types for persistence computations.
//!
//! Every failure mode of the engine is a deterministic logic error in the
//! input (bad index, bad ordering, bad replacement), so none of them are
//! retried internally. They are surfaced to the caller, and batch drivers
//! skip the failing complex.

use std::path::PathBuf;
use thiserror::Error;

/// Convenient `Result` alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TopologyError>;

/// Errors raised by the simplicial complex, boundary matrix, reduction and
/// diagram layers.
#[derive(Debug, Error)]
pub enum TopologyError {
    /// Column or vertex index outside `[0, len)`.
    #[error("index {index} is out of range for {len} columns")]
    InvalidIndex {
        /// The offending index.
        index: usize,
        /// Number of valid entries.
        len: usize,
    },

    /// A face does not precede its coface in the supplied order.
    #[error("filtration order violated: column {column} references row {row}")]
    OrderViolation {
        /// Column of the coface.
        column: usize,
        /// Row index of the face that appears too late.
        row: usize,
    },

    /// A codimension-1 face of a simplex is not part of the complex.
    #[error("face {face:?} of simplex {simplex:?} is missing from the complex")]
    MissingFace {
        /// Vertex set of the simplex whose boundary was requested.
        simplex: Vec<usize>,
        /// Vertex set of the missing face.
        face: Vec<usize>,
    },

    /// Attempted to replace a simplex with one of a different vertex set.
    #[error("cannot replace simplex {existing:?} with {replacement:?}")]
    ReplacementMismatch {
        /// Vertex set stored at the position.
        existing: Vec<usize>,
        /// Vertex set of the rejected replacement.
        replacement: Vec<usize>,
    },

    /// Persistence diagrams of different dimensions were combined.
    #[error("diagram dimensions have to agree: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimension of the receiving diagram.
        expected: usize,
        /// Dimension of the other diagram.
        actual: usize,
    },

    /// A simplex was built from an empty vertex set.
    #[error("a simplex needs at least one vertex")]
    EmptySimplex,

    /// The twist algorithm was handed a matrix that is not the boundary
    /// (or coboundary) matrix of a chain complex.
    #[error("column {column} is not a boundary: {reason}")]
    NotABoundary {
        /// First offending column.
        column: usize,
        /// Which property failed.
        reason: &'static str,
    },

    /// Diagrams need finite weights; `+∞` marks classes that never die.
    #[error("simplex at position {position} has non-finite weight {value}")]
    NonFiniteWeight {
        /// Filtration position of the simplex.
        position: usize,
        /// The offending weight.
        value: f64,
    },

    /// Stratified graph generation received an unusable description.
    #[error("invalid stratification: {0}")]
    InvalidStratification(String),

    /// Normalization needs edge weights with a non-degenerate spread.
    #[error("cannot normalize weights: {0}")]
    DegenerateWeights(&'static str),

    /// Malformed line in the textual diagram format.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// Configuration value out of its admissible range.
    #[error("invalid configuration value for `{field}`: {reason}")]
    Config {
        /// Field name.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Failure to read or write a file.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TopologyError {
    pub fn config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Config {
            field,
            reason: reason.into(),
        }
    }
}
