use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use geojson::{FeatureCollection, GeoJson};
use log::{LevelFilter, info};
use svg::Document;

use parcelfit::entities::{Crs, RawLayer};
use parcelfit::io::import_raw_layer;

use crate::EPOCH;

pub mod cli;
pub mod svg_export;

pub fn read_geojson_layer(path: &Path, fallback_crs: Crs) -> Result<RawLayer> {
    let file =
        File::open(path).with_context(|| format!("could not open layer file {}", path.display()))?;
    let reader = BufReader::new(file);
    let geojson: GeoJson = serde_json::from_reader(reader)
        .with_context(|| format!("could not parse GeoJSON in {}", path.display()))?;
    let fc = FeatureCollection::try_from(geojson)
        .with_context(|| format!("{} is not a FeatureCollection", path.display()))?;
    import_raw_layer(&fc, fallback_crs)
        .with_context(|| format!("could not import layer from {}", path.display()))
}

pub fn write_geojson(fc: &FeatureCollection, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create output file {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer(writer, fc)
        .with_context(|| format!("could not write {}", path.display()))?;
    info!("layer written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)
        .with_context(|| format!("could not write svg file {}", path.display()))?;
    info!("svg written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    Ok(())
}
