use geo::BoundingRect;
use geo_types::{Polygon, Rect};
use svg::Document;
use svg::node::element::Path;
use svg::node::element::path::Data;

use parcelfit::entities::FeasibilityLayer;

const FEASIBLE_FILL: &str = "#4c9a52";
const INFEASIBLE_FILL: &str = "#c65b4e";

/// Renders every record of a feasibility layer, filled by its verdict for
/// one template label. Returns `None` if the label is not in the layer's
/// catalog or the layer is empty.
///
/// GeoJSON/projected coordinates have north up while SVG y grows downward,
/// so all y coordinates are negated.
pub fn verdict_map(layer: &FeasibilityLayer, label: &str) -> Option<Document> {
    let t_idx = layer.catalog.labels().position(|l| l == label)?;

    let bounds = layer
        .records
        .iter()
        .filter_map(|r| r.geometry.bounding_rect())
        .reduce(|a, b| {
            Rect::new(
                (a.min().x.min(b.min().x), a.min().y.min(b.min().y)),
                (a.max().x.max(b.max().x), a.max().y.max(b.max().y)),
            )
        })?;

    let stroke_width = bounds.width().max(bounds.height()) * 0.001;
    let mut document = Document::new().set(
        "viewBox",
        (bounds.min().x, -bounds.max().y, bounds.width(), bounds.height()),
    );

    for record in &layer.records {
        let fill = match record.verdicts[t_idx] {
            true => FEASIBLE_FILL,
            false => INFEASIBLE_FILL,
        };
        let path = Path::new()
            .set("d", polygon_data(&record.geometry))
            .set("fill", fill)
            .set("fill-opacity", 0.6)
            .set("fill-rule", "evenodd")
            .set("stroke", "black")
            .set("stroke-width", stroke_width);
        document = document.add(path);
    }

    Some(document)
}

fn polygon_data(poly: &Polygon<f64>) -> Data {
    let mut data = Data::new();
    let rings = std::iter::once(poly.exterior()).chain(poly.interiors().iter());
    for ring in rings {
        let mut coords = ring.0.iter();
        if let Some(first) = coords.next() {
            data = data.move_to((first.x, -first.y));
        }
        for c in coords {
            data = data.line_to((c.x, -c.y));
        }
        data = data.close();
    }
    data
}
