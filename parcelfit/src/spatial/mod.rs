/// R-tree over record bounding boxes
mod index;

/// Parcel/footprint containment join and aggregation
mod join;

#[doc(inline)]
pub use index::PolyIndex;

#[doc(inline)]
pub use join::{EnvelopeJoin, FootprintAgg, envelope_join};
