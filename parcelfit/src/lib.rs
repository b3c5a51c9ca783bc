//! Geometric feasibility engine for missing-middle housing analysis.
//!
//! Given a parcel layer and a building-footprint layer, `parcelfit` decides per
//! parcel whether an accessory structure fits in the leftover space (addon), whether
//! a new multi-unit building fits on the parcel itself (development), and whether an
//! existing garage or shed could be converted to housing (conversion).
//! All linear measurements assume layers in a projected, distance-preserving CRS.

/// Layers, records, template catalogs and result types
pub mod entities;

/// Feasibility evaluators: the fit predicate and the addon/development/conversion variants
pub mod feasibility;

/// Layer normalization and oriented-dimension derivation
pub mod geometry;

/// Importing layers into and exporting results out of this library (GeoJSON)
pub mod io;

/// Reprojection capability, consumed from collaborators
pub mod projection;

/// Re-attaching computed verdicts onto original, non-simplified layers
pub mod rejoin;

/// Spatial index and containment joins
pub mod spatial;

mod errors;

#[doc(inline)]
pub use errors::Error;

/// Convenience alias for engine results.
pub type Result<T> = std::result::Result<T, Error>;
