use geo::{Centroid, MinimumRotatedRect};
use geo_types::Polygon;
use serde::{Deserialize, Serialize};

use crate::entities::{Dims, MeasuredLayer, MeasuredRecord, NormLayer};
use crate::geometry::distance;
use crate::{Error, Result};

/// Rule for reducing a bounding rectangle to a (width, height) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrientationMode {
    /// width = shorter edge, height = longer edge.
    Shorter,
    /// Reserved: align width with the street-facing edge of the parcel
    /// instead of the shorter one. Not implemented.
    StreetFront,
}

/// Reduces a polygon to its oriented dimensions.
///
/// Takes three consecutive corners a, b, c of the minimum-area rotated rectangle;
/// the two adjacent edge lengths |ab| and |bc| fully characterize the rectangle's
/// two edge-length classes. Invariant of the result: `0 < width <= height`.
pub fn oriented_dims(poly: &Polygon<f64>, mode: OrientationMode) -> Result<Dims> {
    match mode {
        OrientationMode::StreetFront => Err(Error::UnsupportedMode("street-front orientation")),
        OrientationMode::Shorter => {
            let bounding = poly
                .minimum_rotated_rect()
                .ok_or_else(|| Error::DegenerateGeometry("no minimum bounding rectangle".into()))?;

            let ring = &bounding.exterior().0;
            // closed ring of a rectangle: 4 corners + repeated first coordinate
            if ring.len() < 4 {
                return Err(Error::DegenerateGeometry(format!(
                    "bounding ring has only {} vertices",
                    ring.len()
                )));
            }
            let (a, b, c) = (ring[0], ring[1], ring[2]);

            let len_ab = distance(a, b);
            let len_bc = distance(b, c);
            let width = len_ab.min(len_bc);
            let height = len_ab.max(len_bc);

            if width <= 0.0 || !width.is_finite() {
                return Err(Error::DegenerateGeometry(
                    "zero-area bounding rectangle".into(),
                ));
            }

            let centroid = poly
                .centroid()
                .ok_or_else(|| Error::DegenerateGeometry("polygon has no centroid".into()))?;

            Ok(Dims {
                bounding,
                centroid,
                width,
                height,
            })
        }
    }
}

/// Derives oriented dimensions for every record of a normalized layer.
///
/// Pure mapping: the input layer is left untouched. A degenerate record fails
/// the whole derivation with its id attached, rather than carrying NaN
/// dimensions into downstream fit comparisons.
pub fn measure(layer: &NormLayer, mode: OrientationMode) -> Result<MeasuredLayer> {
    let records = layer
        .records
        .iter()
        .map(|r| {
            let dims = oriented_dims(&r.geometry, mode).map_err(|e| match e {
                Error::DegenerateGeometry(msg) => {
                    Error::DegenerateGeometry(format!("record {}: {}", r.id, msg))
                }
                other => other,
            })?;
            Ok(MeasuredRecord {
                id: r.id,
                original: r.geometry.clone(),
                dims,
                attrs: r.attrs.clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(MeasuredLayer {
        kind: layer.kind,
        crs: layer.crs,
        records,
    })
}
