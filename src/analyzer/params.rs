//! Parameters of an analysis run and their upfront validation.
//!
//! Validation never stops at the first problem: every violated rule is
//! collected into a single [`ParamsError`] so the caller can report them all
//! at once.

use crate::segments::ExtractOptions;
use serde::{Deserialize, Serialize};

/// Analysis knobs. Lengths are in the units of the input layer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisParams {
    /// Target vertex spacing for the densifier (> 0).
    pub densify_interval: f64,
    /// Exclusive lower radius bound; must be below `max_radius`.
    pub min_radius: f64,
    /// Exclusive upper radius bound.
    pub max_radius: f64,
    /// Minimum distance between adjacent vertices of a triplet (>= 0).
    pub min_vertex_spacing: f64,
    /// Group circumcenters and produce the cluster layer.
    pub generate_clusters: bool,
    /// Inclusive join distance between a center and a cluster centroid (>= 0).
    pub cluster_distance: f64,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            densify_interval: 15.0,
            min_radius: 2.0,
            max_radius: 50.0,
            min_vertex_spacing: 0.5,
            generate_clusters: false,
            cluster_distance: 10.0,
        }
    }
}

impl AnalysisParams {
    /// Every rule this parameter set violates, in declaration order.
    pub fn problems(&self) -> Vec<ParamProblem> {
        let mut problems = Vec::new();
        if !(self.densify_interval.is_finite() && self.densify_interval > 0.0) {
            problems.push(ParamProblem::DensifyInterval(self.densify_interval));
        }
        if !(self.min_vertex_spacing >= 0.0) {
            problems.push(ParamProblem::MinVertexSpacing(self.min_vertex_spacing));
        }
        if !(self.min_radius < self.max_radius) {
            problems.push(ParamProblem::RadiusRange {
                min: self.min_radius,
                max: self.max_radius,
            });
        }
        if !(self.cluster_distance >= 0.0) {
            problems.push(ParamProblem::ClusterDistance(self.cluster_distance));
        }
        problems
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        ParamsError::from_problems(self.problems())
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            min_radius: self.min_radius,
            max_radius: self.max_radius,
            min_spacing: self.min_vertex_spacing,
            compute_centers: self.generate_clusters,
        }
    }
}

/// One violated configuration rule.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamProblem {
    DensifyInterval(f64),
    MinVertexSpacing(f64),
    RadiusRange { min: f64, max: f64 },
    ClusterDistance(f64),
    MissingInput(String),
}

impl std::fmt::Display for ParamProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamProblem::DensifyInterval(v) => {
                write!(f, "densify interval must be > 0 (got {v})")
            }
            ParamProblem::MinVertexSpacing(v) => {
                write!(f, "minimum vertex spacing cannot be negative (got {v})")
            }
            ParamProblem::RadiusRange { min, max } => {
                write!(f, "minimum radius must be below maximum radius ({min} >= {max})")
            }
            ParamProblem::ClusterDistance(v) => {
                write!(f, "cluster distance must be >= 0 (got {v})")
            }
            ParamProblem::MissingInput(what) => write!(f, "invalid input layer: {what}"),
        }
    }
}

/// All problems found while validating a configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamsError {
    pub problems: Vec<ParamProblem>,
}

impl ParamsError {
    pub fn from_problems(problems: Vec<ParamProblem>) -> Result<(), ParamsError> {
        if problems.is_empty() {
            Ok(())
        } else {
            Err(ParamsError { problems })
        }
    }
}

impl std::fmt::Display for ParamsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, problem) in self.problems.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "• {problem}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParamsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(AnalysisParams::default().validate(), Ok(()));
    }

    #[test]
    fn reports_every_problem_at_once() {
        let params = AnalysisParams {
            densify_interval: 0.0,
            min_radius: 50.0,
            max_radius: 50.0,
            min_vertex_spacing: -1.0,
            generate_clusters: true,
            cluster_distance: -0.5,
        };
        let err = params.validate().unwrap_err();
        assert_eq!(
            err.problems,
            vec![
                ParamProblem::DensifyInterval(0.0),
                ParamProblem::MinVertexSpacing(-1.0),
                ParamProblem::RadiusRange {
                    min: 50.0,
                    max: 50.0
                },
                ParamProblem::ClusterDistance(-0.5),
            ]
        );
        assert_eq!(err.to_string().lines().count(), 4);
    }

    #[test]
    fn nan_values_are_rejected() {
        let params = AnalysisParams {
            densify_interval: f64::NAN,
            min_radius: f64::NAN,
            ..Default::default()
        };
        let problems = params.problems();
        assert_eq!(problems.len(), 2);
    }

    #[test]
    fn extract_options_mirror_params() {
        let params = AnalysisParams {
            generate_clusters: true,
            ..Default::default()
        };
        let opts = params.extract_options();
        assert_eq!(opts.min_radius, 2.0);
        assert_eq!(opts.max_radius, 50.0);
        assert_eq!(opts.min_spacing, 0.5);
        assert!(opts.compute_centers);
    }
}
