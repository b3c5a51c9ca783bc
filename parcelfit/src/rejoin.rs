use geo::{BoundingRect, Contains, InteriorPoint};
use itertools::Itertools;
use log::{debug, info, warn};
use serde_json::Value;

use crate::entities::{FeasibilityLayer, RawLayer, RawRecord};
use crate::geometry::geometry_key;
use crate::projection::Projector;
use crate::spatial::PolyIndex;
use crate::{Error, Result};

/// Re-attaches computed verdict columns onto an original, non-simplified layer.
///
/// Each result geometry is reduced to a representative interior point (inside
/// the polygon even for concave shapes, unlike a raw centroid) and joined to
/// the original record containing it. Left join: originals matching no result
/// carry null verdict columns. When several results land in one original
/// record, the lowest result id wins, the output always has exactly one
/// record per (deduplicated) input record.
///
/// Invoking this twice against the evolving output layers addon and
/// new-development columns onto the same record set; a column name colliding
/// with one from an earlier pass is an error.
pub fn rejoin(
    original: &RawLayer,
    results: &FeasibilityLayer,
    projector: Option<&dyn Projector>,
    drop_duplicates: bool,
) -> Result<RawLayer> {
    let mut records = match drop_duplicates {
        true => {
            let unique = original
                .records
                .iter()
                .unique_by(|r| geometry_key(&r.geometry))
                .cloned()
                .collect_vec();
            if unique.len() < original.records.len() {
                debug!(
                    "[REJOIN] dropped {} duplicate original geometries",
                    original.records.len() - unique.len()
                );
            }
            unique
        }
        false => original.records.clone(),
    };

    let crs = if original.crs != results.crs {
        let projector = projector.ok_or(Error::NoProjector {
            from: original.crs.0,
            to: results.crs.0,
        })?;
        let reprojected = projector.reproject(
            &RawLayer::new(original.crs, std::mem::take(&mut records)),
            results.crs,
        )?;
        records = reprojected.records;
        reprojected.crs
    } else {
        original.crs
    };

    let columns = results.column_names();
    for column in &columns {
        if records.iter().any(|r| r.attrs.contains_key(column)) {
            return Err(Error::DuplicateColumn(column.clone()));
        }
    }

    let index = PolyIndex::build(records.iter().map(|r| r.geometry.bounding_rect()));

    // lowest matching result index per original record
    let mut matched: Vec<Option<usize>> = vec![None; records.len()];
    for (r_idx, result) in results.records.iter().enumerate() {
        let Some(point) = result.geometry.interior_point() else {
            warn!(
                "[REJOIN] result {} has no representative point, skipped",
                result.id
            );
            continue;
        };
        for o_idx in index.candidates(point) {
            if records[o_idx].geometry.contains(&point) {
                matched[o_idx] = Some(match matched[o_idx] {
                    Some(existing) => existing.min(r_idx),
                    None => r_idx,
                });
            }
        }
    }

    let n_matched = matched.iter().filter(|m| m.is_some()).count();
    info!(
        "[REJOIN] {}/{} original records matched a result ({} columns appended)",
        n_matched,
        records.len(),
        columns.len()
    );

    let out_records = records
        .into_iter()
        .zip(matched)
        .map(|(mut record, hit)| {
            for (t_idx, column) in columns.iter().enumerate() {
                let value = match hit {
                    Some(r_idx) => Value::Bool(results.records[r_idx].verdicts[t_idx]),
                    None => Value::Null,
                };
                record.attrs.insert(column.clone(), value);
            }
            record
        })
        .collect();

    Ok(RawLayer::new(crs, out_records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{AttrMap, Crs, FeasibilityRecord, TemplateCatalog};
    use geo_types::{MultiPolygon, Polygon, polygon};

    fn square(x: f64, y: f64, side: f64) -> Polygon<f64> {
        polygon![
            (x: x, y: y),
            (x: x + side, y: y),
            (x: x + side, y: y + side),
            (x: x, y: y + side),
        ]
    }

    fn result_layer(crs: Crs, records: Vec<FeasibilityRecord>) -> FeasibilityLayer {
        FeasibilityLayer::new(crs, "parcel_id", TemplateCatalog::accessory(), None, records)
    }

    #[test]
    fn crs_mismatch_without_projector_is_rejected() {
        let crs_a = Crs(32613);
        let crs_b = Crs(32614);
        let original = RawLayer::new(
            crs_a,
            vec![RawRecord {
                geometry: MultiPolygon::new(vec![square(0.0, 0.0, 10.0)]),
                attrs: AttrMap::new(),
            }],
        );
        let results = result_layer(
            crs_b,
            vec![FeasibilityRecord {
                id: 0,
                geometry: square(0.0, 0.0, 10.0),
                verdicts: vec![true],
            }],
        );
        let err = rejoin(&original, &results, None, false).unwrap_err();
        assert_eq!(err, Error::NoProjector { from: 32613, to: 32614 });
    }

    #[test]
    fn duplicate_column_is_rejected() {
        let crs = Crs(32613);
        let mut attrs = AttrMap::new();
        attrs.insert("adu".to_string(), Value::Bool(false));
        let original = RawLayer::new(
            crs,
            vec![RawRecord {
                geometry: MultiPolygon::new(vec![square(0.0, 0.0, 10.0)]),
                attrs,
            }],
        );
        let results = result_layer(
            crs,
            vec![FeasibilityRecord {
                id: 0,
                geometry: square(0.0, 0.0, 10.0),
                verdicts: vec![true],
            }],
        );
        let err = rejoin(&original, &results, None, false).unwrap_err();
        assert_eq!(err, Error::DuplicateColumn("adu".to_string()));
    }
}
