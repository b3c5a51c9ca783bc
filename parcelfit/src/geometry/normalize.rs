use geo_types::{MultiPolygon, Polygon};
use geo::unary_union;
use itertools::Itertools;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::entities::{AttrMap, LayerKind, NormLayer, NormRecord, RawLayer};
use crate::geometry::geometry_key;
use crate::projection::Projector;
use crate::{Error, Result};

/// How the normalizer turns a raw layer into one record per simple polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizeMode {
    /// Pass records through unchanged, only assign identifiers.
    /// Every record must already be single-part.
    None,
    /// Drop exact-duplicate geometries, then split multi-part records
    /// into one record per constituent simple polygon.
    Simple,
    /// Union the whole layer first, then split the union back into disjoint
    /// simple polygons. Merges touching/overlapping buildings before measurement.
    Dissolve,
    /// Reserved: merge parcels whose combined footprint overlap exceeds a
    /// threshold (a duplex spanning a property line). Not implemented.
    FootprintOverlay,
}

/// Produces a layer of single simple polygons with fresh zero-based identifiers.
///
/// If the layer is still in a geographic CRS it is reprojected through `projector`
/// first, all downstream linear measurements are meaningless otherwise.
pub fn normalize(
    layer: &RawLayer,
    kind: LayerKind,
    mode: NormalizeMode,
    projector: Option<&dyn Projector>,
) -> Result<NormLayer> {
    let projected;
    let layer = if layer.crs.is_geographic() {
        match projector {
            Some(p) => {
                let target = p.projected_crs(layer);
                debug!(
                    "[NORM] reprojecting layer EPSG:{} -> EPSG:{}",
                    layer.crs.0, target.0
                );
                projected = p.reproject(layer, target)?;
                &projected
            }
            None => return Err(Error::GeographicCrs { epsg: layer.crs.0 }),
        }
    } else {
        layer
    };

    let records = match mode {
        NormalizeMode::None => passthrough(layer)?,
        NormalizeMode::Simple => explode_deduped(layer),
        NormalizeMode::Dissolve => dissolve(layer),
        NormalizeMode::FootprintOverlay => {
            return Err(Error::UnsupportedMode("footprint overlay parcel merging"));
        }
    };

    info!(
        "[NORM] {:?}/{:?}: {} raw -> {} normalized records",
        kind,
        mode,
        layer.records.len(),
        records.len()
    );

    Ok(NormLayer::new(kind, layer.crs, records))
}

fn passthrough(layer: &RawLayer) -> Result<Vec<NormRecord>> {
    layer
        .records
        .iter()
        .enumerate()
        .map(|(index, r)| match r.geometry.0.as_slice() {
            [poly] => Ok(NormRecord {
                id: index,
                geometry: poly.clone(),
                attrs: r.attrs.clone(),
            }),
            _ => Err(Error::MultiPart { index }),
        })
        .collect()
}

fn explode_deduped(layer: &RawLayer) -> Vec<NormRecord> {
    let unique = layer
        .records
        .iter()
        .unique_by(|r| geometry_key(&r.geometry))
        .collect_vec();

    if unique.len() < layer.records.len() {
        debug!(
            "[NORM] dropped {} duplicate geometries",
            layer.records.len() - unique.len()
        );
    }

    unique
        .iter()
        .flat_map(|r| r.geometry.0.iter().map(|poly| (poly, &r.attrs)))
        .enumerate()
        .map(|(id, (poly, attrs))| NormRecord {
            id,
            geometry: poly.clone(),
            attrs: attrs.clone(),
        })
        .collect()
}

fn dissolve(layer: &RawLayer) -> Vec<NormRecord> {
    let parts: Vec<&Polygon<f64>> = layer
        .records
        .iter()
        .flat_map(|r| r.geometry.0.iter())
        .collect();

    let merged: MultiPolygon<f64> = unary_union(parts);

    merged
        .0
        .iter()
        .enumerate()
        .map(|(id, poly)| NormRecord {
            id,
            geometry: poly.clone(),
            // dissolved shapes no longer correspond to any single input record
            attrs: AttrMap::new(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Crs, RawRecord};
    use geo_types::polygon;

    fn square(x: f64, y: f64, side: f64) -> Polygon<f64> {
        polygon![
            (x: x, y: y),
            (x: x + side, y: y),
            (x: x + side, y: y + side),
            (x: x, y: y + side),
        ]
    }

    fn layer_of(polys: Vec<Polygon<f64>>) -> RawLayer {
        let records = polys
            .into_iter()
            .map(|p| RawRecord {
                geometry: MultiPolygon::new(vec![p]),
                attrs: AttrMap::new(),
            })
            .collect();
        RawLayer::new(Crs(32613), records)
    }

    #[test]
    fn simple_drops_exact_duplicates() {
        let layer = layer_of(vec![square(0.0, 0.0, 5.0), square(0.0, 0.0, 5.0)]);
        let norm = normalize(&layer, LayerKind::Parcel, NormalizeMode::Simple, None).unwrap();
        assert_eq!(norm.records.len(), 1);
        assert_eq!(norm.records[0].id, 0);
    }

    #[test]
    fn simple_explodes_multipart_records() {
        let mp = MultiPolygon::new(vec![square(0.0, 0.0, 5.0), square(20.0, 0.0, 5.0)]);
        let layer = RawLayer::new(
            Crs(32613),
            vec![RawRecord {
                geometry: mp,
                attrs: AttrMap::new(),
            }],
        );
        let norm = normalize(&layer, LayerKind::Parcel, NormalizeMode::Simple, None).unwrap();
        assert_eq!(norm.records.len(), 2);
        assert_eq!(norm.records.iter().map(|r| r.id).collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn dissolve_merges_touching_buildings() {
        // two squares sharing an edge dissolve into one footprint
        let layer = layer_of(vec![square(0.0, 0.0, 5.0), square(5.0, 0.0, 5.0)]);
        let norm = normalize(&layer, LayerKind::Footprint, NormalizeMode::Dissolve, None).unwrap();
        assert_eq!(norm.records.len(), 1);
    }

    #[test]
    fn none_rejects_multipart_records() {
        let mp = MultiPolygon::new(vec![square(0.0, 0.0, 5.0), square(20.0, 0.0, 5.0)]);
        let layer = RawLayer::new(
            Crs(32613),
            vec![RawRecord {
                geometry: mp,
                attrs: AttrMap::new(),
            }],
        );
        let err = normalize(&layer, LayerKind::Footprint, NormalizeMode::None, None).unwrap_err();
        assert_eq!(err, Error::MultiPart { index: 0 });
    }

    #[test]
    fn footprint_overlay_fails_loudly() {
        let layer = layer_of(vec![square(0.0, 0.0, 5.0)]);
        let err =
            normalize(&layer, LayerKind::Parcel, NormalizeMode::FootprintOverlay, None).unwrap_err();
        assert!(matches!(err, Error::UnsupportedMode(_)));
    }

    #[test]
    fn geographic_layer_without_projector_is_rejected() {
        let mut layer = layer_of(vec![square(0.0, 0.0, 5.0)]);
        layer.crs = Crs::WGS84;
        let err = normalize(&layer, LayerKind::Parcel, NormalizeMode::Simple, None).unwrap_err();
        assert_eq!(err, Error::GeographicCrs { epsg: 4326 });
    }
}
