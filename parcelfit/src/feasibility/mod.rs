use serde::{Deserialize, Serialize};

/// Addon feasibility: fitting an extra structure next to an existing footprint
mod addon;

/// Conversion feasibility: garages/sheds measured against housing templates
mod conversion;

/// New-development feasibility: templates against the bare parcel
mod newdev;

#[doc(inline)]
pub use addon::addon_feasibility;

#[doc(inline)]
pub use conversion::{ConversionFilter, conversion_feasibility};

#[doc(inline)]
pub use newdev::development_feasibility;

/// Whether a template may be rotated 90 degrees to fit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitMode {
    /// Width must fit width and depth must fit depth.
    Directional,
    /// Either axis assignment may fit.
    NonDirectional,
}

/// Shared fit primitive of all three evaluators.
///
/// NaN or negative available dimensions make every comparison false, an
/// undetermined envelope therefore resolves to infeasible rather than error.
pub fn fits(req_w: f64, req_h: f64, avail_w: f64, avail_h: f64, mode: FitMode) -> bool {
    let direct = req_w <= avail_w && req_h <= avail_h;
    match mode {
        FitMode::Directional => direct,
        FitMode::NonDirectional => direct || (req_w <= avail_h && req_h <= avail_w),
    }
}
