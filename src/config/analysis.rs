use crate::analyzer::{AnalysisParams, ParamProblem, ParamsError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct CurveToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    pub output: CurveOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Vertex spacing after densification, in layer units.
    pub densify_interval: f64,
    /// Radii at or below this value are rejected (tight curves).
    pub min_radius: f64,
    /// Radii at or above this value are rejected (near-straight stretches).
    pub max_radius: f64,
    /// Triplets with an edge shorter than this are skipped.
    pub min_vertex_spacing: f64,
    /// Also build the layer of clustered curve centers.
    pub generate_clusters: bool,
    /// Join distance between a curve center and a cluster centroid.
    pub cluster_distance: f64,
    /// Skip densification when the input vertices are already evenly spaced.
    pub skip_densify: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        let params = AnalysisParams::default();
        Self {
            densify_interval: params.densify_interval,
            min_radius: params.min_radius,
            max_radius: params.max_radius,
            min_vertex_spacing: params.min_vertex_spacing,
            generate_clusters: params.generate_clusters,
            cluster_distance: params.cluster_distance,
            skip_densify: false,
        }
    }
}

impl AnalysisConfig {
    pub fn to_params(&self) -> AnalysisParams {
        AnalysisParams {
            densify_interval: self.densify_interval,
            min_radius: self.min_radius,
            max_radius: self.max_radius,
            min_vertex_spacing: self.min_vertex_spacing,
            generate_clusters: self.generate_clusters,
            cluster_distance: self.cluster_distance,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CurveOutputConfig {
    #[serde(rename = "curves_geojson")]
    pub curves_geojson: PathBuf,
    /// Required only when `generate_clusters` is set.
    #[serde(default)]
    pub clusters_geojson: Option<PathBuf>,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

impl CurveToolConfig {
    /// Check the analysis parameters and the input path together, so that
    /// every problem is reported in one pass.
    pub fn resolve(&self) -> Result<AnalysisParams, ParamsError> {
        let params = self.analysis.to_params();
        let mut problems = Vec::new();
        if !self.input.is_file() {
            problems.push(ParamProblem::MissingInput(format!(
                "{} is not a readable file",
                self.input.display()
            )));
        }
        problems.extend(params.problems());
        ParamsError::from_problems(problems)?;
        Ok(params)
    }
}

pub fn load_config(path: &Path) -> Result<CurveToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(data: &str) -> Result<CurveToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}
