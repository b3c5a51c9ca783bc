use geojson::{Feature, FeatureCollection, Geometry};
use serde_json::Value;

use crate::entities::{FeasibilityLayer, RawLayer};
use crate::io::ext_repr::{crs_foreign_member, value_from_multi_polygon, value_from_polygon};

/// Converts a raw layer (typically rejoin output) back into a FeatureCollection,
/// preserving all attributes including appended verdict columns.
pub fn export_raw_layer(layer: &RawLayer) -> FeatureCollection {
    let features = layer
        .records
        .iter()
        .map(|r| Feature {
            bbox: None,
            geometry: Some(Geometry::new(value_from_multi_polygon(&r.geometry))),
            id: None,
            properties: Some(r.attrs.clone()),
            foreign_members: None,
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: Some(crs_foreign_member(layer.crs)),
    }
}

/// Converts a feasibility layer into a FeatureCollection, flattening the
/// verdict vector into one named boolean column per template.
pub fn export_feasibility_layer(layer: &FeasibilityLayer) -> FeatureCollection {
    let columns = layer.column_names();

    let features = layer
        .records
        .iter()
        .map(|r| {
            let mut properties = geojson::JsonObject::new();
            properties.insert(layer.id_field.to_string(), Value::from(r.id as u64));
            for (column, &verdict) in columns.iter().zip(&r.verdicts) {
                properties.insert(column.clone(), Value::Bool(verdict));
            }
            Feature {
                bbox: None,
                geometry: Some(Geometry::new(value_from_polygon(&r.geometry))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: Some(crs_foreign_member(layer.crs)),
    }
}
