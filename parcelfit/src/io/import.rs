use anyhow::Result;
use geojson::FeatureCollection;
use log::warn;

use crate::entities::{AttrMap, Crs, RawLayer, RawRecord};
use crate::io::ext_repr::{crs_from_foreign_members, multi_polygon_from_value};

/// Converts a GeoJSON FeatureCollection into a raw polygon layer.
///
/// The CRS comes from the collection's legacy `crs` member if present,
/// otherwise from `fallback_crs` (plain GeoJSON implies WGS84, but projected
/// exports from desktop GIS tools routinely carry the member). Non-polygon
/// features are skipped with a warning, this engine only evaluates polygons.
pub fn import_raw_layer(fc: &FeatureCollection, fallback_crs: Crs) -> Result<RawLayer> {
    let crs = crs_from_foreign_members(fc.foreign_members.as_ref()).unwrap_or(fallback_crs);

    let mut records = Vec::with_capacity(fc.features.len());
    for (i, feature) in fc.features.iter().enumerate() {
        let Some(geometry) = &feature.geometry else {
            warn!("[IMPORT] feature {i} has no geometry, skipped");
            continue;
        };
        let Some(mp) = multi_polygon_from_value(&geometry.value) else {
            warn!("[IMPORT] feature {i} is not a (multi)polygon, skipped");
            continue;
        };
        if mp.0.is_empty() {
            warn!("[IMPORT] feature {i} has an empty geometry, skipped");
            continue;
        }
        records.push(RawRecord {
            geometry: mp,
            attrs: feature.properties.clone().unwrap_or_else(AttrMap::new),
        });
    }

    anyhow::ensure!(
        !records.is_empty(),
        "no polygon features found in collection of {} features",
        fc.features.len()
    );

    Ok(RawLayer::new(crs, records))
}
