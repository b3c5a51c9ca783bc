use std::sync::LazyLock;
use std::time::Instant;

/// Analysis configuration with documented defaults
pub mod config;

/// File handling, CLI definition, logger and SVG rendering
pub mod io;

/// End-to-end feasibility analysis over a parcel and a footprint layer
pub mod pipeline;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
