//! Analysis configuration
//!
//! Defaults describe the plain weight filtration with global vertex
//! weights; [`AnalysisConfig::preset`] is the absolute, reversed variant
//! used for signed graph weights.

use crate::error::{Result, TopologyError};
use crate::reduction::Reduction;
use crate::topology::Filtration;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How vertices get their weights from the incident edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VertexWeights {
    /// Every vertex gets the filtration-extremal edge weight
    #[default]
    Global,
    /// Every vertex gets the weight of its first incident edge in
    /// filtration order
    Local,
}

/// Rescaling applied to all simplex weights before filtration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Normalization {
    /// Divide by the largest absolute edge weight
    Abs,
    /// Map the edge weight range onto [-1, 1]
    MinMax,
    /// Mean 0, sample standard deviation 1 over the edge weights
    Standardize,
}

/// Configuration for graph persistence analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Filtration policy
    pub filtration: Filtration,
    /// Descending instead of ascending weights
    pub reverse: bool,
    /// Vertex weight assignment strategy
    pub weights: VertexWeights,
    /// Weight normalization applied before anything else
    pub normalization: Option<Normalization>,
    /// Scale the final diagram into [0, 1] by the complex's weight range
    pub normalize_diagram: bool,
    /// Reduction algorithm
    pub algorithm: Reduction,
    /// Reduce the coboundary matrix
    pub dualize: bool,
    /// Exponent of the diagram p-norm
    pub p: f64,
    /// Report full diagrams instead of their norms
    pub persistence_diagrams: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            filtration: Filtration::Standard,
            reverse: false,
            weights: VertexWeights::Global,
            normalization: None,
            normalize_diagram: false,
            algorithm: Reduction::Standard,
            dualize: false,
            p: 2.0,
            persistence_diagrams: false,
        }
    }
}

impl AnalysisConfig {
    /// Absolute, reversed filtration with global vertex weights and
    /// weights scaled by their largest magnitude.
    pub fn preset() -> Self {
        Self {
            filtration: Filtration::Absolute,
            reverse: true,
            weights: VertexWeights::Global,
            normalization: Some(Normalization::Abs),
            ..Self::default()
        }
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if !self.p.is_finite() || self.p < 1.0 {
            return Err(TopologyError::config("p", format!("must be finite and >= 1, got {}", self.p)));
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    pub fn from_json(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| TopologyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AnalysisConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Write this configuration as pretty-printed JSON.
    pub fn to_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| TopologyError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(AnalysisConfig::default().validate().is_ok());
        assert!(AnalysisConfig::preset().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_p() {
        let config = AnalysisConfig {
            p: 0.5,
            ..AnalysisConfig::default()
        };
        assert!(matches!(config.validate(), Err(TopologyError::Config { field: "p", .. })));

        let config = AnalysisConfig {
            p: f64::NAN,
            ..AnalysisConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AnalysisConfig =
            serde_json::from_str(r#"{"filtration": "absolute", "normalization": "minmax"}"#).unwrap();
        assert_eq!(config.filtration, Filtration::Absolute);
        assert_eq!(config.normalization, Some(Normalization::MinMax));
        assert_eq!(config.weights, VertexWeights::Global);
        assert_eq!(config.p, 2.0);
        assert!(!config.persistence_diagrams);

        let config: AnalysisConfig = serde_json::from_str(r#"{"persistence_diagrams": true}"#).unwrap();
        assert!(config.persistence_diagrams);
    }

    #[test]
    fn test_json_file_round_trip() {
        let path = std::env::temp_dir().join(format!("analysis-config-{}.json", std::process::id()));
        let config = AnalysisConfig::preset();
        config.to_json(&path).unwrap();
        let loaded = AnalysisConfig::from_json(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file() {
        let err = AnalysisConfig::from_json(Path::new("/nonexistent/config.json")).unwrap_err();
        assert!(matches!(err, TopologyError::Io { .. }));
    }
}
