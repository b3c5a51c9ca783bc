use log::info;
use serde::{Deserialize, Serialize};

use crate::entities::{AttrMap, FeasibilityLayer, FeasibilityRecord, MeasuredLayer, TemplateCatalog};
use crate::feasibility::{FitMode, fits};

/// Attribute filter selecting which footprints are conversion candidates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConversionFilter {
    /// Attribute key carrying the building-type classification
    pub attr_key: String,
    /// Values that qualify for conversion
    pub attr_values: Vec<String>,
}

impl Default for ConversionFilter {
    /// Defaults match OSM building tags.
    fn default() -> Self {
        Self {
            attr_key: "building".to_string(),
            attr_values: vec!["garage".to_string(), "shed".to_string()],
        }
    }
}

impl ConversionFilter {
    fn matches(&self, attrs: &AttrMap) -> bool {
        attrs
            .get(&self.attr_key)
            .and_then(|v| v.as_str())
            .is_some_and(|v| self.attr_values.iter().any(|w| w == v))
    }
}

/// Evaluates whether existing accessory structures could be converted to
/// housing, based on their own oriented dimensions.
///
/// Operates on a non-dissolved footprint layer (the classification attribute
/// must survive normalization), assigns fresh `conversion_id`s to the
/// filtered records, and namespaces output columns with `conversion_`.
pub fn conversion_feasibility(
    footprints: &MeasuredLayer,
    filter: &ConversionFilter,
    catalog: &TemplateCatalog,
) -> FeasibilityLayer {
    let records = footprints
        .records
        .iter()
        .filter(|r| filter.matches(&r.attrs))
        .enumerate()
        .map(|(conversion_id, foot)| {
            let verdicts = catalog
                .templates
                .iter()
                .map(|t| {
                    fits(
                        t.width,
                        t.depth,
                        foot.dims.width,
                        foot.dims.height,
                        FitMode::NonDirectional,
                    )
                })
                .collect();
            FeasibilityRecord {
                id: conversion_id,
                geometry: foot.original.clone(),
                verdicts,
            }
        })
        .collect();

    let layer = FeasibilityLayer::new(
        footprints.crs,
        "conversion_id",
        catalog.clone(),
        Some("conversion_"),
        records,
    );
    info!(
        "[CONV] {} of {} footprints qualify as conversion candidates",
        layer.records.len(),
        footprints.records.len()
    );
    layer
}
