use geo_types::{Coord, MultiPolygon};

/// Layer normalization: dedup, explode, dissolve
pub mod normalize;

/// Minimum-rotated-rectangle reduction to oriented (width, height)
pub mod orientation;

#[doc(inline)]
pub use normalize::{NormalizeMode, normalize};

#[doc(inline)]
pub use orientation::{OrientationMode, measure, oriented_dims};

/// Euclidean distance between two coordinates.
pub(crate) fn distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Exact-equality key of a multi-polygon: ring lengths and coordinate bit patterns.
/// Used to drop duplicate geometries, two records collide only if every
/// coordinate is bit-identical in the same order.
pub(crate) fn geometry_key(mp: &MultiPolygon<f64>) -> Vec<u64> {
    let mut key = Vec::new();
    for poly in &mp.0 {
        let rings = std::iter::once(poly.exterior()).chain(poly.interiors().iter());
        for ring in rings {
            key.push(ring.0.len() as u64);
            for c in &ring.0 {
                key.push(c.x.to_bits());
                key.push(c.y.to_bits());
            }
        }
    }
    key
}
