use geo_types::{MultiPolygon, Polygon};
use serde::{Deserialize, Serialize};

/// Attribute map of a record, preserved verbatim through the pipeline.
/// Maps 1:1 onto GeoJSON feature properties.
pub type AttrMap = serde_json::Map<String, serde_json::Value>;

/// Coordinate reference system tag of a layer, identified by EPSG code.
///
/// The engine never performs reprojection itself (see [`Projector`](crate::projection::Projector)),
/// it only tracks which CRS a layer is in and whether that CRS preserves distances.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Crs(pub u32);

impl Crs {
    pub const WGS84: Crs = Crs(4326);

    /// Geographic (angular-unit) systems, in which all linear measurements of this
    /// engine are meaningless. Codes limited to the datums seen in practice.
    pub fn is_geographic(&self) -> bool {
        matches!(self.0, 4326 | 4269 | 4267 | 4258)
    }

    pub fn is_projected(&self) -> bool {
        !self.is_geographic()
    }
}

/// Which kind of layer a normalized record set represents.
/// Determines the identifier column name on export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerKind {
    Parcel,
    Footprint,
}

impl LayerKind {
    pub fn id_field(&self) -> &'static str {
        match self {
            LayerKind::Parcel => "parcel_id",
            LayerKind::Footprint => "foot_id",
        }
    }
}

/// A record of a raw input layer: possibly multi-part geometry plus its original attributes.
#[derive(Clone, Debug)]
pub struct RawRecord {
    pub geometry: MultiPolygon<f64>,
    pub attrs: AttrMap,
}

/// A polygon layer as loaded from a geospatial source, before normalization.
#[derive(Clone, Debug)]
pub struct RawLayer {
    pub crs: Crs,
    pub records: Vec<RawRecord>,
}

impl RawLayer {
    pub fn new(crs: Crs, records: Vec<RawRecord>) -> Self {
        Self { crs, records }
    }
}

/// A record of a normalized layer: one simple polygon with a stable, layer-scoped identifier.
///
/// Identifiers are zero-based and sequential within one layer generation,
/// they are not globally unique across re-runs.
#[derive(Clone, Debug)]
pub struct NormRecord {
    pub id: usize,
    pub geometry: Polygon<f64>,
    pub attrs: AttrMap,
}

/// A normalized polygon layer: output of the geometry normalizer.
#[derive(Clone, Debug)]
pub struct NormLayer {
    pub kind: LayerKind,
    pub crs: Crs,
    pub records: Vec<NormRecord>,
}

impl NormLayer {
    pub fn new(kind: LayerKind, crs: Crs, records: Vec<NormRecord>) -> Self {
        assert!(
            records.iter().enumerate().all(|(i, r)| r.id == i),
            "normalized records must carry consecutive ids starting from 0"
        );
        Self { kind, crs, records }
    }
}
