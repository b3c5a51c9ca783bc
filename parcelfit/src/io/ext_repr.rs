use geo_types::{Coord, LineString, MultiPolygon, Polygon};
use geojson::JsonObject;

use crate::entities::Crs;

type Position = Vec<f64>;
type RingRepr = Vec<Position>;
type PolygonRepr = Vec<RingRepr>;

fn ring_from_repr(repr: &RingRepr) -> LineString<f64> {
    repr.iter()
        .map(|pos| Coord {
            x: pos[0],
            y: pos[1],
        })
        .collect()
}

fn polygon_from_repr(repr: &PolygonRepr) -> Option<Polygon<f64>> {
    let mut rings = repr.iter().map(ring_from_repr);
    let exterior = rings.next()?;
    Some(Polygon::new(exterior, rings.collect()))
}

/// Polygon and MultiPolygon GeoJSON values become a [`MultiPolygon`], anything
/// else is `None`, this engine only deals in polygon layers.
pub(crate) fn multi_polygon_from_value(value: &geojson::Value) -> Option<MultiPolygon<f64>> {
    match value {
        geojson::Value::Polygon(repr) => {
            Some(MultiPolygon::new(vec![polygon_from_repr(repr)?]))
        }
        geojson::Value::MultiPolygon(reprs) => Some(MultiPolygon::new(
            reprs.iter().filter_map(polygon_from_repr).collect(),
        )),
        _ => None,
    }
}

fn ring_repr(ring: &LineString<f64>) -> RingRepr {
    ring.0.iter().map(|c| vec![c.x, c.y]).collect()
}

fn polygon_repr(poly: &Polygon<f64>) -> PolygonRepr {
    std::iter::once(poly.exterior())
        .chain(poly.interiors().iter())
        .map(ring_repr)
        .collect()
}

pub(crate) fn value_from_polygon(poly: &Polygon<f64>) -> geojson::Value {
    geojson::Value::Polygon(polygon_repr(poly))
}

pub(crate) fn value_from_multi_polygon(mp: &MultiPolygon<f64>) -> geojson::Value {
    geojson::Value::MultiPolygon(mp.0.iter().map(polygon_repr).collect())
}

/// Parses the legacy `crs` foreign member of a FeatureCollection
/// (`"EPSG:32613"` or `"urn:ogc:def:crs:EPSG::32613"`).
pub(crate) fn crs_from_foreign_members(members: Option<&JsonObject>) -> Option<Crs> {
    let name = members?
        .get("crs")?
        .get("properties")?
        .get("name")?
        .as_str()?;
    let code = name.rsplit(':').next()?.parse().ok()?;
    Some(Crs(code))
}

/// The matching writer: a named-CRS foreign member.
pub(crate) fn crs_foreign_member(crs: Crs) -> JsonObject {
    let mut members = JsonObject::new();
    members.insert(
        "crs".to_string(),
        serde_json::json!({
            "type": "name",
            "properties": { "name": format!("urn:ogc:def:crs:EPSG::{}", crs.0) }
        }),
    );
    members
}
