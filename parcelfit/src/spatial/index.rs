use geo_types::{Point, Rect};
use rstar::{AABB, RTree, RTreeObject};

/// Bounding box of one record, tagged with its position in the layer.
#[derive(Clone, Debug)]
struct IndexedBox {
    idx: usize,
    bbox: Rect<f64>,
}

impl RTreeObject for IndexedBox {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.bbox.min().into(), self.bbox.max().into())
    }
}

/// R-tree over the bounding boxes of a record collection.
///
/// Containment joins query this first and apply the exact point-in-polygon
/// predicate only to the surviving candidates, avoiding the full cross product.
pub struct PolyIndex {
    tree: RTree<IndexedBox>,
}

impl PolyIndex {
    /// Builds the index from per-record bounding boxes, in layer order.
    /// Records without a bounding box (empty geometries) are skipped,
    /// nothing can be contained in them.
    pub fn build(bboxes: impl IntoIterator<Item = Option<Rect<f64>>>) -> Self {
        let boxes = bboxes
            .into_iter()
            .enumerate()
            .filter_map(|(idx, bbox)| bbox.map(|bbox| IndexedBox { idx, bbox }))
            .collect();
        Self {
            tree: RTree::bulk_load(boxes),
        }
    }

    /// Indices of all records whose bounding box contains `point`.
    /// Candidates only, callers still apply the exact containment predicate.
    pub fn candidates(&self, point: Point<f64>) -> impl Iterator<Item = usize> + '_ {
        self.tree
            .locate_in_envelope_intersecting(&AABB::from_point([point.x(), point.y()]))
            .map(|b| b.idx)
    }
}
