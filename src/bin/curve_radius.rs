use curve_radius::analyzer::{CurveAnalyzer, LogFeedback};
use curve_radius::config::load_config;
use curve_radius::densify::Passthrough;
use curve_radius::io::{load_layer, write_clusters_geojson, write_curves_geojson, write_json_file};
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;
    let params = config.resolve().map_err(|e| format!("Invalid configuration:\n{e}"))?;
    if params.generate_clusters && config.output.clusters_geojson.is_none() {
        return Err("output.clusters_geojson is required when generate_clusters is set".to_string());
    }

    let layer = load_layer(&config.input)?;
    let analyzer = CurveAnalyzer::new(params).map_err(|e| e.to_string())?;
    let mut feedback = LogFeedback::new();
    let output = if config.analysis.skip_densify {
        analyzer
            .with_densifier(Passthrough)
            .analyze(&layer, &mut feedback)
    } else {
        analyzer.analyze(&layer, &mut feedback)
    };

    let timing = &output.report.timing;
    println!(
        "Analysis took {:.3} ms (extract {:.3} ms)",
        timing.total_ms,
        timing.stage_ms("extract").unwrap_or(0.0)
    );

    let srid = &output.report.srid;
    write_curves_geojson(&config.output.curves_geojson, srid, &output.curves)?;
    println!(
        "Saved {} curve segments to {}",
        output.curves.len(),
        config.output.curves_geojson.display()
    );
    if let (Some(clusters), Some(path)) = (&output.clusters, &config.output.clusters_geojson) {
        write_clusters_geojson(path, srid, clusters)?;
        println!("Saved {} clusters to {}", clusters.len(), path.display());
    }
    if let Some(path) = &config.output.report_json {
        write_json_file(path, &output.report)?;
        println!("Saved run report to {}", path.display());
    }
    Ok(())
}

fn usage() -> String {
    "Usage: curve_radius <config.json>".to_string()
}
