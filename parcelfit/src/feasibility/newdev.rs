use log::info;

use crate::entities::{FeasibilityLayer, FeasibilityRecord, MeasuredLayer, TemplateCatalog};
use crate::feasibility::{FitMode, fits};

/// Evaluates whether each template fits directly on the parcel's own
/// (width, height), with no footprint subtraction.
///
/// Development defaults to [`FitMode::Directional`]: a duplex drawn for a
/// 16x33 lot does not fit a 33x16 one unless the caller opts into rotation.
pub fn development_feasibility(
    parcels: &MeasuredLayer,
    catalog: &TemplateCatalog,
    fit_mode: FitMode,
) -> FeasibilityLayer {
    let records = parcels
        .records
        .iter()
        .map(|parcel| {
            let verdicts = catalog
                .templates
                .iter()
                .map(|t| {
                    fits(
                        t.width,
                        t.depth,
                        parcel.dims.width,
                        parcel.dims.height,
                        fit_mode,
                    )
                })
                .collect();
            FeasibilityRecord {
                id: parcel.id,
                geometry: parcel.original.clone(),
                verdicts,
            }
        })
        .collect();

    let layer = FeasibilityLayer::new(parcels.crs, "parcel_id", catalog.clone(), None, records);
    info!(
        "[NEWDEV] evaluated {} parcels against {} templates",
        layer.records.len(),
        catalog.len()
    );
    layer
}
