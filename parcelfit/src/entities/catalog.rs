use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A named building type with its minimum required footprint, in the linear
/// unit of the projected layer (meters for the built-in catalogs).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuildingTemplate {
    pub label: String,
    pub width: f64,
    pub depth: f64,
}

impl BuildingTemplate {
    pub fn new(label: &str, width: f64, depth: f64) -> Self {
        Self {
            label: label.to_string(),
            width,
            depth,
        }
    }
}

/// An ordered catalog of building templates to evaluate feasibility against.
///
/// The built-in catalogs are process-wide defaults, callers supply their own
/// catalog of the same shape to override them. Never mutated at runtime.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TemplateCatalog {
    pub templates: Vec<BuildingTemplate>,
}

impl TemplateCatalog {
    pub fn new(templates: Vec<BuildingTemplate>) -> Self {
        assert!(!templates.is_empty(), "catalog must contain at least one template");
        assert!(
            templates.iter().map(|t| &t.label).all_unique(),
            "template labels must be unique within a catalog"
        );
        assert!(
            templates.iter().all(|t| t.width > 0.0 && t.depth > 0.0),
            "template dimensions must be positive"
        );
        Self { templates }
    }

    /// Default accessory catalog: a single minimal ADU footprint.
    pub fn accessory() -> Self {
        Self::new(vec![BuildingTemplate::new("adu", 3.05, 4.57)])
    }

    /// Default new-development catalog: common missing-middle building types.
    pub fn development() -> Self {
        Self::new(vec![
            BuildingTemplate::new("duplex", 16.76, 33.53),
            BuildingTemplate::new("triplex", 12.19, 32.0),
            BuildingTemplate::new("fourplex", 15.24, 36.58),
            BuildingTemplate::new("townhouse", 3.05, 7.62),
            BuildingTemplate::new("multiplex", 28.96, 35.05),
            BuildingTemplate::new("cottage court", 33.53, 45.72),
        ])
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|t| t.label.as_str())
    }
}
