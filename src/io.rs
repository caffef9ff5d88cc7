//! File I/O for the command-line tool.
//!
//! - `load_layer`: read a JSON line layer (`{"srid": ..., "records": [...]}`).
//! - `write_curves_geojson` / `write_clusters_geojson`: write an output layer
//!   as a GeoJSON `FeatureCollection`, recording the spatial reference in a
//!   named `crs` member.
//! - `write_json_file`: pretty-print a serializable value to disk.
use crate::analyzer::Layer;
use crate::records::{ClusterRecord, CurveRecord};
use crate::types::{Point, SpatialRef};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an input layer from a JSON file.
pub fn load_layer(path: &Path) -> Result<Layer, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read layer {}: {e}", path.display()))?;
    serde_json::from_str(&data).map_err(|e| format!("Failed to parse layer {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

#[derive(Serialize)]
struct FeatureCollection<'a, P, C> {
    #[serde(rename = "type")]
    kind: &'static str,
    crs: NamedCrs<'a>,
    features: Vec<Feature<P, C>>,
}

#[derive(Serialize)]
struct NamedCrs<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    properties: CrsName<'a>,
}

#[derive(Serialize)]
struct CrsName<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct Feature<P, C> {
    #[serde(rename = "type")]
    kind: &'static str,
    properties: P,
    geometry: Geometry<C>,
}

#[derive(Serialize)]
struct Geometry<C> {
    #[serde(rename = "type")]
    kind: &'static str,
    coordinates: C,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CurveProperties {
    curve_id: i64,
    cluster_id: i64,
    radius: f64,
    length: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClusterProperties {
    cluster_id: i64,
    mean_radius: f64,
    count: i64,
}

fn xy(p: &Point) -> [f64; 2] {
    [p.x, p.y]
}

fn collection<'a, P, C>(srid: &'a SpatialRef, features: Vec<Feature<P, C>>) -> FeatureCollection<'a, P, C> {
    FeatureCollection {
        kind: "FeatureCollection",
        crs: NamedCrs {
            kind: "name",
            properties: CrsName { name: srid.as_str() },
        },
        features,
    }
}

/// Write curve records as `LineString` features.
pub fn write_curves_geojson(path: &Path, srid: &SpatialRef, curves: &[CurveRecord]) -> Result<(), String> {
    let features = curves
        .iter()
        .map(|c| Feature {
            kind: "Feature",
            properties: CurveProperties {
                curve_id: c.curve_id,
                cluster_id: c.cluster_id,
                radius: c.radius,
                length: c.length,
            },
            geometry: Geometry {
                kind: "LineString",
                coordinates: c.geometry.iter().map(xy).collect::<Vec<_>>(),
            },
        })
        .collect();
    write_json_file(path, &collection(srid, features))
}

/// Write cluster records as `Point` features.
pub fn write_clusters_geojson(
    path: &Path,
    srid: &SpatialRef,
    clusters: &[ClusterRecord],
) -> Result<(), String> {
    let features = clusters
        .iter()
        .map(|c| Feature {
            kind: "Feature",
            properties: ClusterProperties {
                cluster_id: c.cluster_id,
                mean_radius: c.mean_radius,
                count: c.count,
            },
            geometry: Geometry {
                kind: "Point",
                coordinates: xy(&c.geometry),
            },
        })
        .collect();
    write_json_file(path, &collection(srid, features))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
