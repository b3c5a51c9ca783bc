use serde::{Deserialize, Serialize};

use parcelfit::entities::TemplateCatalog;
use parcelfit::feasibility::{ConversionFilter, FitMode};
use parcelfit::geometry::{NormalizeMode, OrientationMode};

/// Configuration for a full feasibility analysis run.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AnalysisConfig {
    /// How parcels are normalized before measurement
    pub parcel_mode: NormalizeMode,
    /// How footprints are normalized for the addon envelope math
    pub footprint_mode: NormalizeMode,
    /// Bounding-rectangle reduction rule
    pub orientation: OrientationMode,
    /// Templates evaluated against leftover parcel space
    pub addon_catalog: TemplateCatalog,
    /// Templates evaluated against the bare parcel
    pub development_catalog: TemplateCatalog,
    /// Whether development templates may rotate 90 degrees to fit
    pub development_fit: FitMode,
    /// Templates evaluated against existing accessory structures
    pub conversion_catalog: TemplateCatalog,
    /// Which footprints qualify as conversion candidates
    pub conversion_filter: ConversionFilter,
    /// Drop exact-duplicate geometries from the original parcel layer before rejoining
    pub drop_duplicates: bool,
    /// EPSG code assumed for input files that carry no CRS member
    pub fallback_epsg: u32,
    /// Template label rendered in the SVG verdict map. If undefined, no SVG is written
    #[serde(default)]
    pub svg_template: Option<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            parcel_mode: NormalizeMode::Simple,
            footprint_mode: NormalizeMode::Dissolve,
            orientation: OrientationMode::Shorter,
            addon_catalog: TemplateCatalog::accessory(),
            development_catalog: TemplateCatalog::development(),
            development_fit: FitMode::Directional,
            conversion_catalog: TemplateCatalog::accessory(),
            conversion_filter: ConversionFilter::default(),
            drop_duplicates: true,
            fallback_epsg: 4326,
            svg_template: Some("adu".to_string()),
        }
    }
}
