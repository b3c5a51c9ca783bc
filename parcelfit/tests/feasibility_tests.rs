use float_cmp::approx_eq;
use geo_types::{MultiPolygon, Polygon, polygon};
use serde_json::json;
use test_case::test_case;

use parcelfit::entities::{
    AttrMap, Crs, LayerKind, MeasuredLayer, RawLayer, RawRecord, TemplateCatalog,
};
use parcelfit::feasibility::{
    ConversionFilter, FitMode, addon_feasibility, conversion_feasibility,
    development_feasibility, fits,
};
use parcelfit::geometry::{NormalizeMode, OrientationMode, measure, normalize};
use parcelfit::spatial::envelope_join;

const CRS: Crs = Crs(32613);

fn rect(x: f64, y: f64, w: f64, h: f64) -> Polygon<f64> {
    polygon![
        (x: x, y: y),
        (x: x + w, y: y),
        (x: x + w, y: y + h),
        (x: x, y: y + h),
    ]
}

fn measured(kind: LayerKind, polys: Vec<(Polygon<f64>, AttrMap)>) -> MeasuredLayer {
    let records = polys
        .into_iter()
        .map(|(p, attrs)| RawRecord {
            geometry: MultiPolygon::new(vec![p]),
            attrs,
        })
        .collect();
    let raw = RawLayer::new(CRS, records);
    let norm = normalize(&raw, kind, NormalizeMode::None, None).unwrap();
    measure(&norm, OrientationMode::Shorter).unwrap()
}

fn bare(polys: Vec<Polygon<f64>>) -> MeasuredLayer {
    measured(
        LayerKind::Parcel,
        polys.into_iter().map(|p| (p, AttrMap::new())).collect(),
    )
}

// --- fit predicate ---

#[test_case(3.0, 5.0, 10.0, 10.0)]
#[test_case(5.0, 3.0, 4.0, 6.0)]
#[test_case(7.0, 2.0, 6.5, 2.1)]
#[test_case(1.0, 1.0, 0.5, 2.0)]
#[test_case(4.0, 4.0, 4.0, 4.0)]
fn non_directional_fit_is_symmetric(w: f64, h: f64, avail_w: f64, avail_h: f64) {
    assert_eq!(
        fits(w, h, avail_w, avail_h, FitMode::NonDirectional),
        fits(h, w, avail_w, avail_h, FitMode::NonDirectional),
    );
}

#[test_case(3.0, 5.0, 10.0, 10.0)]
#[test_case(5.0, 3.0, 4.0, 6.0)]
#[test_case(2.0, 8.0, 8.0, 2.0)]
#[test_case(4.0, 4.0, 4.0, 4.0)]
#[test_case(9.0, 1.0, 9.0, 0.9)]
fn directional_fit_implies_non_directional_fit(w: f64, h: f64, avail_w: f64, avail_h: f64) {
    if fits(w, h, avail_w, avail_h, FitMode::Directional) {
        assert!(fits(w, h, avail_w, avail_h, FitMode::NonDirectional));
    }
}

#[test]
fn nan_available_space_is_infeasible() {
    assert!(!fits(3.0, 5.0, f64::NAN, 10.0, FitMode::NonDirectional));
    assert!(!fits(3.0, 5.0, 10.0, f64::NAN, FitMode::Directional));
}

// --- new development ---

#[test]
fn duplex_fits_empty_20_by_40_parcel() {
    let parcels = bare(vec![rect(0.0, 0.0, 20.0, 40.0)]);
    let result = development_feasibility(
        &parcels,
        &TemplateCatalog::development(),
        FitMode::Directional,
    );
    assert_eq!(result.verdict(0, "duplex"), Some(true));
    // 28.96 wide multiplex cannot fit a 20 m wide parcel
    assert_eq!(result.verdict(0, "multiplex"), Some(false));
}

#[test]
fn directional_development_rejects_rotated_fit() {
    // 40 m wide and 20 m deep: duplex (16.76 x 33.53) only fits rotated
    let parcels = bare(vec![rect(0.0, 0.0, 40.0, 20.0)]);
    // oriented dims sort to width=20, height=40, so the directional default
    // still fits; force the rotation question with a catalog that only fits
    // one way around
    let catalog = TemplateCatalog::new(vec![
        parcelfit::entities::BuildingTemplate::new("wide", 38.0, 10.0),
    ]);
    let directional = development_feasibility(&parcels, &catalog, FitMode::Directional);
    let rotatable = development_feasibility(&parcels, &catalog, FitMode::NonDirectional);
    assert_eq!(directional.verdict(0, "wide"), Some(false));
    assert_eq!(rotatable.verdict(0, "wide"), Some(true));
}

// --- addon ---

#[test]
fn centered_footprint_leaves_half_the_remaining_depth() {
    let parcels = bare(vec![rect(0.0, 0.0, 20.0, 40.0)]);
    // 5 x 10 footprint centered on the parcel centroid (10, 20)
    let footprints = bare(vec![rect(7.5, 15.0, 5.0, 10.0)]);

    let joins = envelope_join(&parcels, &footprints).unwrap();
    let foot = joins[0].footprint.as_ref().unwrap();
    assert!(approx_eq!(f64, foot.width, 5.0, epsilon = 1e-9));
    assert!(approx_eq!(f64, foot.height, 10.0, epsilon = 1e-9));

    // displacement 0 -> true_height = (40 - 10) / 2 = 15, adu fits (20, 15)
    let result = addon_feasibility(&parcels, &footprints, &TemplateCatalog::accessory()).unwrap();
    assert_eq!(result.verdict(0, "adu"), Some(true));
}

#[test]
fn parcel_without_footprint_is_infeasible_for_addons() {
    let parcels = bare(vec![rect(0.0, 0.0, 20.0, 40.0)]);
    // footprint sits in a different parcel entirely
    let footprints = bare(vec![rect(500.0, 500.0, 5.0, 5.0)]);

    let result = addon_feasibility(&parcels, &footprints, &TemplateCatalog::accessory()).unwrap();
    assert_eq!(result.verdict(0, "adu"), Some(false));
}

#[test]
fn oversized_footprint_yields_negative_depth_and_is_infeasible() {
    // thin footprint running the full height of the parcel and beyond
    let parcels = bare(vec![rect(0.0, 0.0, 10.0, 12.0)]);
    let footprints = bare(vec![rect(4.5, -9.0, 1.0, 30.0)]);

    let result = addon_feasibility(&parcels, &footprints, &TemplateCatalog::accessory()).unwrap();
    assert_eq!(result.verdict(0, "adu"), Some(false));
}

#[test]
fn multiple_footprints_aggregate_largest_width_and_summed_heights() {
    let parcels = bare(vec![rect(0.0, 0.0, 20.0, 40.0)]);
    // three buildings: 6x8 (largest, centered), 3x4 and 2x3
    let footprints = bare(vec![
        rect(7.0, 16.0, 6.0, 8.0),
        rect(1.0, 1.0, 3.0, 4.0),
        rect(16.0, 35.0, 2.0, 3.0),
    ]);

    let joins = envelope_join(&parcels, &footprints).unwrap();
    assert_eq!(joins.len(), 1);
    let foot = joins[0].footprint.as_ref().unwrap();
    assert!(approx_eq!(f64, foot.width, 6.0, epsilon = 1e-9));
    assert!(approx_eq!(f64, foot.height, 8.0 + 4.0 + 3.0, epsilon = 1e-9));
    // centroid of the largest footprint, which is the parcel centroid here
    assert!(approx_eq!(f64, foot.centroid.x(), 10.0, epsilon = 1e-9));
    assert!(approx_eq!(f64, foot.centroid.y(), 20.0, epsilon = 1e-9));

    // true_height = (40 - 15) / 2 = 12.5, adu still fits
    let result = addon_feasibility(&parcels, &footprints, &TemplateCatalog::accessory()).unwrap();
    assert_eq!(result.verdict(0, "adu"), Some(true));
}

#[test]
fn displaced_footprint_frees_up_depth_on_the_far_side() {
    let parcels = bare(vec![rect(0.0, 0.0, 20.0, 40.0)]);
    // 5 x 10 footprint pushed to the bottom edge: centroid (10, 5), displacement 15
    let footprints = bare(vec![rect(7.5, 0.0, 5.0, 10.0)]);

    let joins = envelope_join(&parcels, &footprints).unwrap();
    let foot = joins[0].footprint.as_ref().unwrap();
    // max_displacement = 20 - 5 = 15, so the displacement percentage is 1:
    // the full remaining depth (30) pools on the far side
    assert!(approx_eq!(f64, foot.centroid.y(), 5.0, epsilon = 1e-9));

    let catalog = TemplateCatalog::new(vec![
        parcelfit::entities::BuildingTemplate::new("deep", 4.0, 29.0),
    ]);
    let result = addon_feasibility(&parcels, &footprints, &catalog).unwrap();
    assert_eq!(result.verdict(0, "deep"), Some(true));
}

// --- conversion ---

fn building(kind: &str) -> AttrMap {
    let mut attrs = AttrMap::new();
    attrs.insert("building".to_string(), json!(kind));
    attrs
}

#[test]
fn undersized_shed_cannot_convert() {
    let footprints = measured(
        LayerKind::Footprint,
        vec![(rect(0.0, 0.0, 2.0, 3.0), building("shed"))],
    );
    let result = conversion_feasibility(
        &footprints,
        &ConversionFilter::default(),
        &TemplateCatalog::accessory(),
    );
    assert_eq!(result.records.len(), 1);
    // 3.05 > 2 and 3.05 > 3: fails both axis assignments
    assert_eq!(result.verdict(0, "adu"), Some(false));
    assert_eq!(result.column_names(), vec!["conversion_adu".to_string()]);
}

#[test]
fn garage_large_enough_converts_and_houses_are_filtered_out() {
    let footprints = measured(
        LayerKind::Footprint,
        vec![
            (rect(0.0, 0.0, 4.0, 6.0), building("garage")),
            (rect(50.0, 0.0, 12.0, 15.0), building("house")),
            (rect(100.0, 0.0, 5.0, 3.2), building("shed")),
        ],
    );
    let result = conversion_feasibility(
        &footprints,
        &ConversionFilter::default(),
        &TemplateCatalog::accessory(),
    );
    // the house is not a conversion candidate
    assert_eq!(result.records.len(), 2);
    // 3.05 <= 4 and 4.57 <= 6
    assert_eq!(result.verdict(0, "adu"), Some(true));
    // 3.2 x 5 shed: adu fits rotated (3.05 <= 3.2, 4.57 <= 5)
    assert_eq!(result.verdict(1, "adu"), Some(true));
}
