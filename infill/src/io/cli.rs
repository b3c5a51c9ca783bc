use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// GeoJSON file with the parcel layer
    #[arg(short, long, value_name = "FILE")]
    pub parcel_file: PathBuf,
    /// GeoJSON file with the building-footprint layer
    #[arg(short, long, value_name = "FILE")]
    pub footprint_file: PathBuf,
    #[arg(short, long, value_name = "FOLDER")]
    pub output_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
