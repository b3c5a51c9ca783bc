/// Building template catalogs
mod catalog;

/// Raw and normalized polygon layers
mod layer;

/// Layers with derived oriented dimensions
mod measured;

/// Per-template feasibility verdicts
mod results;

#[doc(inline)]
pub use catalog::{BuildingTemplate, TemplateCatalog};

#[doc(inline)]
pub use layer::{AttrMap, Crs, LayerKind, NormLayer, NormRecord, RawLayer, RawRecord};

#[doc(inline)]
pub use measured::{Dims, MeasuredLayer, MeasuredRecord};

#[doc(inline)]
pub use results::{FeasibilityLayer, FeasibilityRecord};
