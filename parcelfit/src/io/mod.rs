//! GeoJSON external representation of layers.
//!
//! The engine's collections convert to and from [`geojson::FeatureCollection`];
//! reading and writing actual files is left to the caller.

/// Conversions between GeoJSON values and geometry/CRS types
mod ext_repr;

/// FeatureCollection -> RawLayer
mod import;

/// Layers -> FeatureCollection
mod export;

#[doc(inline)]
pub use import::import_raw_layer;

#[doc(inline)]
pub use export::{export_feasibility_layer, export_raw_layer};
