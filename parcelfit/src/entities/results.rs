use geo_types::Polygon;

use crate::entities::{Crs, TemplateCatalog};

/// Per-record feasibility verdicts, aligned index-for-index with the catalog
/// of the owning [`FeasibilityLayer`].
#[derive(Clone, Debug)]
pub struct FeasibilityRecord {
    pub id: usize,
    pub geometry: Polygon<f64>,
    pub verdicts: Vec<bool>,
}

/// Output of a feasibility evaluator: one verdict vector per evaluated record.
///
/// Verdicts stay a structured mapping in memory, flattening them into named
/// boolean columns happens at serialization/rejoin time only.
#[derive(Clone, Debug)]
pub struct FeasibilityLayer {
    pub crs: Crs,
    /// Name of the identifier column on export ("parcel_id", "conversion_id", ...)
    pub id_field: &'static str,
    pub catalog: TemplateCatalog,
    /// Prefix applied to every verdict column name ("conversion_" for the conversion pass)
    pub column_prefix: Option<&'static str>,
    pub records: Vec<FeasibilityRecord>,
}

impl FeasibilityLayer {
    pub fn new(
        crs: Crs,
        id_field: &'static str,
        catalog: TemplateCatalog,
        column_prefix: Option<&'static str>,
        records: Vec<FeasibilityRecord>,
    ) -> Self {
        assert!(
            records.iter().all(|r| r.verdicts.len() == catalog.len()),
            "every verdict vector must align with the catalog"
        );
        Self {
            crs,
            id_field,
            catalog,
            column_prefix,
            records,
        }
    }

    /// Flattened column name of the template at `index`.
    pub fn column_name(&self, index: usize) -> String {
        let label = &self.catalog.templates[index].label;
        match self.column_prefix {
            Some(prefix) => format!("{prefix}{label}"),
            None => label.clone(),
        }
    }

    pub fn column_names(&self) -> Vec<String> {
        (0..self.catalog.len()).map(|i| self.column_name(i)).collect()
    }

    /// Verdict for a given record and template label, if both exist.
    pub fn verdict(&self, record_id: usize, label: &str) -> Option<bool> {
        let t_idx = self.catalog.labels().position(|l| l == label)?;
        let record = self.records.iter().find(|r| r.id == record_id)?;
        Some(record.verdicts[t_idx])
    }
}
