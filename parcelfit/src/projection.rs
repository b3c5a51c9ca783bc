use crate::Result;
use crate::entities::{Crs, RawLayer};

/// Reprojection capability, consumed from a collaborator.
///
/// The engine itself never implements projection math. Operations that may
/// need to reproject (normalization of geographic layers, rejoining layers in
/// different systems) take an `Option<&dyn Projector>` and fail with
/// [`Error::GeographicCrs`](crate::Error::GeographicCrs) or
/// [`Error::NoProjector`](crate::Error::NoProjector) when none is supplied.
pub trait Projector {
    /// A projected, distance-preserving CRS appropriate for the layer's
    /// location (automatic UTM-zone-style selection is acceptable).
    fn projected_crs(&self, layer: &RawLayer) -> Crs;

    /// Reprojects every coordinate of `layer` into `target`.
    fn reproject(&self, layer: &RawLayer, target: Crs) -> Result<RawLayer>;
}
