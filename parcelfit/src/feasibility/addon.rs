use log::info;

use crate::Result;
use crate::entities::{FeasibilityLayer, FeasibilityRecord, MeasuredLayer, TemplateCatalog};
use crate::feasibility::{FitMode, fits};
use crate::geometry::distance;
use crate::spatial::{EnvelopeJoin, envelope_join};

/// Evaluates whether each template fits in the space a parcel has left after
/// its existing buildings.
///
/// The remaining depth is estimated with the centroid-displacement heuristic:
/// the further the footprint centroid sits from the parcel centroid, the more
/// of the leftover depth is assumed to pool on the opposite side. Parcels
/// containing no footprint resolve every template to infeasible, there is no
/// envelope to subtract from.
pub fn addon_feasibility(
    parcels: &MeasuredLayer,
    footprints: &MeasuredLayer,
    catalog: &TemplateCatalog,
) -> Result<FeasibilityLayer> {
    let joins = envelope_join(parcels, footprints)?;

    let records = joins
        .into_iter()
        .map(|join| {
            let verdicts = catalog
                .templates
                .iter()
                .map(|t| addon_fits(&join, t.width, t.depth))
                .collect();
            FeasibilityRecord {
                id: join.parcel_id,
                geometry: join.geometry,
                verdicts,
            }
        })
        .collect();

    let layer = FeasibilityLayer::new(parcels.crs, "parcel_id", catalog.clone(), None, records);
    info!(
        "[ADDON] evaluated {} parcels against {} templates",
        layer.records.len(),
        catalog.len()
    );
    Ok(layer)
}

/// The centroid-displacement heuristic for one parcel and one template.
fn addon_fits(join: &EnvelopeJoin, req_w: f64, req_h: f64) -> bool {
    let Some(foot) = &join.footprint else {
        return false;
    };

    // half-depth the footprint centroid can be offset before falling off the parcel
    let max_displacement = join.parcel_height / 2.0 - foot.height / 2.0;
    let displacement = distance(join.parcel_centroid.0, foot.centroid.0);
    let displacement_pct = displacement / max_displacement;

    // depth left once the footprint occupies its share, biased toward the side
    // the footprint is offset away from
    let max_height = join.parcel_height - foot.height;
    let true_height = max_height / 2.0 + displacement_pct * (max_height / 2.0);

    // an over-occupied parcel yields negative or NaN true_height, which fails
    // both comparisons: infeasible, not an error
    fits(
        req_w,
        req_h,
        join.parcel_width,
        true_height,
        FitMode::NonDirectional,
    )
}
