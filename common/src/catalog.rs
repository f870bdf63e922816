//! The validated, read-only disease catalog.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::disease::{seed_records, DiseaseRecord, Severity};
use crate::error::CatalogError;
use crate::filter::{self, CropFilter, FilterState};

/// Ordered collection of disease records.
///
/// Serialises as a plain JSON array; deserialising runs the same validation
/// as [`Catalog::from_records`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DiseaseRecord>", into = "Vec<DiseaseRecord>")]
pub struct Catalog {
    records: Vec<DiseaseRecord>,
}

impl Catalog {
    /// The built-in dataset.
    pub fn seed() -> Self {
        Catalog {
            records: seed_records(),
        }
    }

    /// Validate and wrap `records`, keeping their order.
    pub fn from_records(records: Vec<DiseaseRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for r in &records {
            if r.name.trim().is_empty() {
                return Err(CatalogError::EmptyField { id: r.id, field: "name" });
            }
            if r.crop.trim().is_empty() {
                return Err(CatalogError::EmptyField { id: r.id, field: "crop" });
            }
            if r.crop == filter::ALL {
                return Err(CatalogError::ReservedCrop { id: r.id });
            }
            if !seen.insert(r.id) {
                return Err(CatalogError::DuplicateId(r.id));
            }
        }
        Ok(Catalog { records })
    }

    /// Read a JSON array of records from `path`.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path)?;
        let catalog: Catalog = serde_json::from_str(&text)?;
        info!("Loaded {} disease records from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn records(&self) -> &[DiseaseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&DiseaseRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Distinct crop names in order of first appearance.
    pub fn crops(&self) -> Vec<&str> {
        let mut crops: Vec<&str> = Vec::new();
        for r in &self.records {
            if !crops.contains(&r.crop.as_str()) {
                crops.push(&r.crop);
            }
        }
        crops
    }

    pub fn crop_options(&self) -> Vec<CropFilter> {
        filter::crop_options(&self.records)
    }

    pub fn filter(&self, state: &FilterState) -> Vec<&DiseaseRecord> {
        filter::apply(&self.records, state)
    }

    /// Diseases known for `crop`, in catalog order.
    pub fn for_crop(&self, crop: &str) -> Vec<&DiseaseRecord> {
        self.filter(&FilterState {
            crop: CropFilter::Crop(crop.to_string()),
            ..Default::default()
        })
    }

    /// Record count per severity, every severity listed even when zero.
    pub fn severity_counts(&self) -> Vec<(Severity, usize)> {
        Severity::ALL
            .iter()
            .map(|s| (*s, self.records.iter().filter(|r| r.severity == *s).count()))
            .collect()
    }

    /// Record count per crop, in order of first appearance.
    pub fn crop_counts(&self) -> Vec<(String, usize)> {
        self.crops()
            .into_iter()
            .map(|c| {
                let n = self.records.iter().filter(|r| r.crop == c).count();
                (c.to_string(), n)
            })
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::seed()
    }
}

impl TryFrom<Vec<DiseaseRecord>> for Catalog {
    type Error = CatalogError;

    fn try_from(records: Vec<DiseaseRecord>) -> Result<Self, Self::Error> {
        Catalog::from_records(records)
    }
}

impl From<Catalog> for Vec<DiseaseRecord> {
    fn from(catalog: Catalog) -> Self {
        catalog.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn tempfile(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("agriguard_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_seed_catalog() {
        let c = Catalog::seed();
        assert_eq!(c.len(), 4);
        assert_eq!(c.get(4).unwrap().name, "Stewart's Wilt");
        assert!(c.get(99).is_none());
        assert_eq!(c.crops(), vec!["Tomato", "Potato", "Corn"]);
    }

    #[test]
    fn test_rejects_empty_crop() {
        let mut records = seed_records();
        records[2].crop = "  ".into();
        match Catalog::from_records(records) {
            Err(CatalogError::EmptyField { id, field }) => {
                assert_eq!(id, 3);
                assert_eq!(field, "crop");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_reserved_crop_and_duplicates() {
        let mut records = seed_records();
        records[0].crop = "All".into();
        assert!(matches!(
            Catalog::from_records(records),
            Err(CatalogError::ReservedCrop { id: 1 })
        ));

        let mut records = seed_records();
        records[3].id = 1;
        assert!(matches!(
            Catalog::from_records(records),
            Err(CatalogError::DuplicateId(1))
        ));
    }

    #[test]
    fn test_load_from_json_file() {
        let json = serde_json::to_string(&Catalog::seed()).unwrap();
        assert!(json.starts_with('['));
        let path = tempfile("catalog.json", &json);
        let loaded = Catalog::load(&path).unwrap();
        assert_eq!(loaded, Catalog::seed());
    }

    #[test]
    fn test_load_revalidates() {
        let mut records = seed_records();
        records[1].name = String::new();
        let path = tempfile("bad_catalog.json", &serde_json::to_string(&records).unwrap());
        assert!(matches!(Catalog::load(&path), Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("agriguard_test/does_not_exist.json");
        assert!(matches!(Catalog::load(&path), Err(CatalogError::Io(_))));
    }

    #[test]
    fn test_counts() {
        let c = Catalog::seed();
        assert_eq!(
            c.severity_counts(),
            vec![(Severity::Severe, 2), (Severity::Moderate, 2), (Severity::Mild, 0)]
        );
        assert_eq!(
            c.crop_counts(),
            vec![
                ("Tomato".to_string(), 2),
                ("Potato".to_string(), 1),
                ("Corn".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_for_crop() {
        let c = Catalog::seed();
        let tomato: Vec<u32> = c.for_crop("Tomato").iter().map(|r| r.id).collect();
        assert_eq!(tomato, vec![1, 2]);
        assert!(c.for_crop("Wheat").is_empty());
    }
}
