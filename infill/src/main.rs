use std::fs;
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use infill::config::AnalysisConfig;
use infill::io::cli::Cli;
use infill::io;
use infill::io::svg_export;
use infill::pipeline::run_analysis;
use parcelfit::entities::Crs;
use parcelfit::io::{export_feasibility_layer, export_raw_layer};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            AnalysisConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed AnalysisConfig: {config:?}");

    if !args.output_folder.exists() {
        fs::create_dir_all(&args.output_folder).with_context(|| {
            format!("could not create output folder: {:?}", args.output_folder)
        })?;
    }

    let fallback_crs = Crs(config.fallback_epsg);
    let parcels = io::read_geojson_layer(&args.parcel_file, fallback_crs)?;
    let footprints = io::read_geojson_layer(&args.footprint_file, fallback_crs)?;

    // no projector capability is wired in, inputs must already be projected
    let output = run_analysis(&parcels, &footprints, &config, None)?;

    io::write_geojson(
        &export_raw_layer(&output.parcels),
        &args.output_folder.join("parcels_feasibility.geojson"),
    )?;
    io::write_geojson(
        &export_feasibility_layer(&output.conversions),
        &args.output_folder.join("conversion_candidates.geojson"),
    )?;

    if let Some(label) = &config.svg_template {
        let document = output
            .layer_with_label(label)
            .and_then(|layer| svg_export::verdict_map(layer, label));
        match document {
            Some(document) => {
                let svg_path = args.output_folder.join(format!("verdicts_{label}.svg"));
                io::write_svg(&document, &svg_path)?;
            }
            None => warn!("[MAIN] no result layer carries template `{label}`, svg skipped"),
        }
    }

    Ok(())
}
