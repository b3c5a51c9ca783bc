use thiserror::Error;

/// Failure modes of the feasibility engine.
///
/// The geometric math makes most of these implicit (NaN propagation, silent no-ops);
/// here they are explicit contract violations instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Geometry too degenerate to reduce to a (width, height) pair.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// Reserved extension point without an implementation. Failing loudly here,
    /// a silent pass-through would return nothing and corrupt downstream joins.
    #[error("`{0}` is a reserved extension point and has no implementation yet")]
    UnsupportedMode(&'static str),

    /// Layers in different coordinate reference systems cannot be joined.
    #[error("CRS mismatch: EPSG:{left} vs EPSG:{right}")]
    CrsMismatch { left: u32, right: u32 },

    /// Linear measurements in a geographic CRS are meaningless.
    #[error("layer is in geographic CRS EPSG:{epsg}, a projected CRS is required")]
    GeographicCrs { epsg: u32 },

    /// A single-polygon record was required but the geometry is multi-part.
    #[error("record {index} is multi-part, normalize the layer with `Simple` or `Dissolve` first")]
    MultiPart { index: usize },

    /// A verdict column about to be joined already exists on the output layer.
    #[error("column `{0}` already exists on the output layer")]
    DuplicateColumn(String),

    /// An operation needed to reproject but no [`Projector`](crate::projection::Projector) was supplied.
    #[error("reprojection required (EPSG:{from} -> EPSG:{to}) but no projector was supplied")]
    NoProjector { from: u32, to: u32 },
}
