use anyhow::{Context, Result};
use log::info;

use parcelfit::entities::{FeasibilityLayer, LayerKind, RawLayer};
use parcelfit::feasibility::{addon_feasibility, conversion_feasibility, development_feasibility};
use parcelfit::geometry::{NormalizeMode, measure, normalize};
use parcelfit::projection::Projector;
use parcelfit::rejoin::rejoin;

use crate::config::AnalysisConfig;

/// Everything one analysis run produces.
pub struct AnalysisOutput {
    /// The original parcel layer with addon and development verdict columns appended
    pub parcels: RawLayer,
    /// Per-building conversion verdicts, a separate layer since they are building-specific
    pub conversions: FeasibilityLayer,
    /// Intermediate addon verdicts on the simplified parcels (also used for SVG rendering)
    pub addon: FeasibilityLayer,
    /// Intermediate development verdicts on the simplified parcels
    pub development: FeasibilityLayer,
}

impl AnalysisOutput {
    /// The result layer carrying a given template label, searched addon first.
    pub fn layer_with_label(&self, label: &str) -> Option<&FeasibilityLayer> {
        [&self.addon, &self.development, &self.conversions]
            .into_iter()
            .find(|l| l.catalog.labels().any(|x| x == label))
    }
}

/// Runs the full missing-middle analysis:
/// normalize and measure both layers, evaluate addon and development
/// feasibility, rejoin both verdict sets onto the original parcel records,
/// then run a separate non-dissolved footprint pass for conversions.
pub fn run_analysis(
    parcels: &RawLayer,
    footprints: &RawLayer,
    config: &AnalysisConfig,
    projector: Option<&dyn Projector>,
) -> Result<AnalysisOutput> {
    let sf = normalize(footprints, LayerKind::Footprint, config.footprint_mode, projector)
        .context("normalizing footprint layer")?;
    let sp = normalize(parcels, LayerKind::Parcel, config.parcel_mode, projector)
        .context("normalizing parcel layer")?;

    let sf = measure(&sf, config.orientation).context("measuring footprint layer")?;
    let sp = measure(&sp, config.orientation).context("measuring parcel layer")?;

    let addon = addon_feasibility(&sp, &sf, &config.addon_catalog)?;
    let development =
        development_feasibility(&sp, &config.development_catalog, config.development_fit);

    let annotated = rejoin(parcels, &addon, projector, config.drop_duplicates)
        .context("rejoining addon verdicts")?;
    // duplicates are already gone after the first pass
    let annotated = rejoin(&annotated, &development, projector, false)
        .context("rejoining development verdicts")?;

    // conversion needs the non-dissolved layer: the building-type attribute
    // must survive normalization
    let cf = normalize(footprints, LayerKind::Footprint, NormalizeMode::None, projector)
        .context("normalizing footprint layer for conversion")?;
    let cf = measure(&cf, config.orientation).context("measuring conversion candidates")?;
    let conversions =
        conversion_feasibility(&cf, &config.conversion_filter, &config.conversion_catalog);

    info!(
        "[PIPELINE] {} parcels annotated, {} conversion candidates",
        annotated.records.len(),
        conversions.records.len()
    );

    Ok(AnalysisOutput {
        parcels: annotated,
        conversions,
        addon,
        development,
    })
}
