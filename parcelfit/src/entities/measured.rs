use geo_types::{Point, Polygon};

use crate::entities::{AttrMap, Crs, LayerKind};

/// Oriented dimensions derived from a polygon's minimum-area bounding rectangle.
#[derive(Clone, Debug)]
pub struct Dims {
    /// Minimum-area oriented rectangle enclosing the polygon
    pub bounding: Polygon<f64>,
    pub centroid: Point<f64>,
    /// Shorter edge length of the bounding rectangle
    pub width: f64,
    /// Longer edge length of the bounding rectangle
    pub height: f64,
}

impl Dims {
    /// Area of the bounding rectangle, used to rank footprints within a parcel group.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// A normalized record together with its derived dimensions.
/// Read-only after derivation, feasibility evaluators never mutate it.
#[derive(Clone, Debug)]
pub struct MeasuredRecord {
    pub id: usize,
    /// Unmodified input polygon
    pub original: Polygon<f64>,
    pub dims: Dims,
    pub attrs: AttrMap,
}

/// A layer whose records carry oriented dimensions: output of the orientation deriver.
#[derive(Clone, Debug)]
pub struct MeasuredLayer {
    pub kind: LayerKind,
    pub crs: Crs,
    pub records: Vec<MeasuredRecord>,
}
