use std::cmp::Reverse;

use geo::{BoundingRect, Contains};
use geo_types::{Point, Polygon};
use log::debug;
use ordered_float::OrderedFloat;

use crate::entities::MeasuredLayer;
use crate::spatial::PolyIndex;
use crate::{Error, Result};

/// Aggregated footprint occupancy of a parcel.
///
/// When a parcel contains several buildings: `width` and `centroid` come from
/// the largest footprint (by bounding-rectangle area), `height` is the SUM of
/// all footprint heights in the group, read as total occupied depth.
#[derive(Clone, Debug)]
pub struct FootprintAgg {
    pub width: f64,
    pub height: f64,
    pub centroid: Point<f64>,
}

/// One parcel joined with the footprints whose centroid it contains.
/// Exactly one of these exists per parcel, footprint or not (left join).
#[derive(Clone, Debug)]
pub struct EnvelopeJoin {
    pub parcel_id: usize,
    pub geometry: Polygon<f64>,
    pub parcel_width: f64,
    pub parcel_height: f64,
    pub parcel_centroid: Point<f64>,
    pub footprint: Option<FootprintAgg>,
}

/// Associates footprints with parcels via centroid-in-parcel containment.
///
/// A footprint whose centroid lies in no parcel, and a parcel containing no
/// footprint centroid, are both valid outcomes. Both layers must already be
/// measured and share a CRS.
pub fn envelope_join(
    parcels: &MeasuredLayer,
    footprints: &MeasuredLayer,
) -> Result<Vec<EnvelopeJoin>> {
    if parcels.crs != footprints.crs {
        return Err(Error::CrsMismatch {
            left: parcels.crs.0,
            right: footprints.crs.0,
        });
    }

    let index = PolyIndex::build(parcels.records.iter().map(|r| r.original.bounding_rect()));

    // footprint indices grouped per parcel; a centroid lying inside several
    // overlapping parcels joins each of them
    let mut groups: Vec<Vec<usize>> = vec![Vec::new(); parcels.records.len()];
    let mut orphans = 0usize;
    for (f_idx, foot) in footprints.records.iter().enumerate() {
        let centroid = foot.dims.centroid;
        let mut matched = false;
        for p_idx in index.candidates(centroid) {
            if parcels.records[p_idx].original.contains(&centroid) {
                groups[p_idx].push(f_idx);
                matched = true;
            }
        }
        if !matched {
            orphans += 1;
        }
    }
    if orphans > 0 {
        debug!("[JOIN] {orphans} footprints matched no parcel");
    }

    let joins = parcels
        .records
        .iter()
        .zip(groups.iter_mut())
        .map(|(parcel, group)| {
            // largest footprint first; ties broken by footprint id for determinism
            group.sort_by_key(|&f| {
                (
                    Reverse(OrderedFloat(footprints.records[f].dims.area())),
                    footprints.records[f].id,
                )
            });

            let footprint = group.first().map(|&largest| FootprintAgg {
                width: footprints.records[largest].dims.width,
                centroid: footprints.records[largest].dims.centroid,
                height: group
                    .iter()
                    .map(|&f| footprints.records[f].dims.height)
                    .sum(),
            });

            EnvelopeJoin {
                parcel_id: parcel.id,
                geometry: parcel.original.clone(),
                parcel_width: parcel.dims.width,
                parcel_height: parcel.dims.height,
                parcel_centroid: parcel.dims.centroid,
                footprint,
            }
        })
        .collect();

    Ok(joins)
}
