//! Client-side search and filtering over disease records.
//!
//! A [`FilterState`] holds the three user inputs of the catalog page. The
//! visible subset is recomputed in full from the state and the record list
//! every time an input changes; nothing is cached between calls.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::disease::{DiseaseRecord, Severity};

/// Option value that disables a selector.
pub const ALL: &str = "All";

// ─── Crop selector ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CropFilter {
    #[default]
    All,
    Crop(String),
}

impl CropFilter {
    /// Value used for the `<option>` element.
    pub fn value(&self) -> &str {
        match self {
            CropFilter::All => ALL,
            CropFilter::Crop(c) => c,
        }
    }

    pub fn label(&self) -> String {
        format!("{} Crops", self.value())
    }

    /// Map an `<option>` value back to a filter. Crop names are taken as-is.
    pub fn from_option(value: &str) -> Self {
        if value == ALL {
            CropFilter::All
        } else {
            CropFilter::Crop(value.to_string())
        }
    }

    pub fn accepts(&self, crop: &str) -> bool {
        match self {
            CropFilter::All => true,
            CropFilter::Crop(c) => c == crop,
        }
    }
}

impl fmt::Display for CropFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

// ─── Severity selector ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeverityFilter {
    #[default]
    All,
    Only(Severity),
}

impl SeverityFilter {
    /// The fixed option list. Independent of what the dataset contains, so
    /// `Mild` is offered even when no record has that severity.
    pub fn options() -> [SeverityFilter; 4] {
        [
            SeverityFilter::All,
            SeverityFilter::Only(Severity::Severe),
            SeverityFilter::Only(Severity::Moderate),
            SeverityFilter::Only(Severity::Mild),
        ]
    }

    pub fn value(&self) -> &'static str {
        match self {
            SeverityFilter::All => ALL,
            SeverityFilter::Only(s) => s.as_str(),
        }
    }

    pub fn label(&self) -> String {
        format!("{} Severity", self.value())
    }

    /// Map an `<option>` value back to a filter; unknown values select `All`.
    pub fn from_option(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    pub fn accepts(&self, severity: Severity) -> bool {
        match self {
            SeverityFilter::All => true,
            SeverityFilter::Only(s) => *s == severity,
        }
    }
}

impl FromStr for SeverityFilter {
    type Err = crate::disease::UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            Ok(SeverityFilter::All)
        } else {
            s.parse().map(SeverityFilter::Only)
        }
    }
}

impl fmt::Display for SeverityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

// ─── Filter state ────────────────────────────────────────────────────────────

/// The three inputs of the catalog page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub query: String,
    pub crop: CropFilter,
    pub severity: SeverityFilter,
}

impl FilterState {
    pub fn is_default(&self) -> bool {
        *self == FilterState::default()
    }

    /// True when `record` satisfies the query and both selectors.
    pub fn matches(&self, record: &DiseaseRecord) -> bool {
        self.matches_lowered(&self.query.to_lowercase(), record)
    }

    fn matches_lowered(&self, needle: &str, record: &DiseaseRecord) -> bool {
        record.mentions(needle)
            && self.crop.accepts(&record.crop)
            && self.severity.accepts(record.severity)
    }
}

/// Stable filter: the returned records keep their original relative order.
pub fn apply<'a>(records: &'a [DiseaseRecord], state: &FilterState) -> Vec<&'a DiseaseRecord> {
    let needle = state.query.to_lowercase();
    records
        .iter()
        .filter(|r| state.matches_lowered(&needle, r))
        .collect()
}

/// `All` followed by each distinct crop, in order of first appearance.
pub fn crop_options(records: &[DiseaseRecord]) -> Vec<CropFilter> {
    let mut options = vec![CropFilter::All];
    for record in records {
        if !options.iter().any(|o| o.value() == record.crop) {
            options.push(CropFilter::Crop(record.crop.clone()));
        }
    }
    options
}

/// Header line above the result grid.
pub fn summary(visible: usize, total: usize) -> String {
    format!("Showing {visible} of {total} diseases")
}

// ─── tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disease::seed_records;

    fn names(records: &[&DiseaseRecord]) -> Vec<String> {
        records.iter().map(|r| r.name.clone()).collect()
    }

    fn query(q: &str) -> FilterState {
        FilterState {
            query: q.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_state_returns_everything() {
        let records = seed_records();
        let state = FilterState::default();
        assert!(state.is_default());
        let visible = apply(&records, &state);
        assert_eq!(visible.len(), records.len());
        assert!(visible.iter().zip(records.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_query_late() {
        let records = seed_records();
        let visible = apply(&records, &query("late"));
        assert_eq!(names(&visible), vec!["Late Blight"]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let records = seed_records();
        let upper = apply(&records, &query("BLIGHT"));
        let lower = apply(&records, &query("blight"));
        assert_eq!(upper, lower);
        assert_eq!(names(&upper), vec!["Early Blight", "Late Blight"]);
    }

    #[test]
    fn test_query_matches_scientific_name_and_crop() {
        let records = seed_records();
        assert_eq!(names(&apply(&records, &query("erwinia"))), vec!["Stewart's Wilt"]);
        assert_eq!(names(&apply(&records, &query("POTATO"))), vec!["Potato Virus Y"]);
    }

    #[test]
    fn test_crop_corn() {
        let records = seed_records();
        let state = FilterState {
            crop: CropFilter::Crop("Corn".into()),
            ..Default::default()
        };
        assert_eq!(names(&apply(&records, &state)), vec!["Stewart's Wilt"]);
    }

    #[test]
    fn test_mild_yields_empty_result() {
        let records = seed_records();
        let state = FilterState {
            severity: SeverityFilter::Only(Severity::Mild),
            ..Default::default()
        };
        let visible = apply(&records, &state);
        assert!(visible.is_empty());
        assert_eq!(summary(visible.len(), records.len()), "Showing 0 of 4 diseases");
    }

    #[test]
    fn test_crop_and_severity_without_overlap() {
        let records = seed_records();
        let state = FilterState {
            crop: CropFilter::Crop("Potato".into()),
            severity: SeverityFilter::Only(Severity::Moderate),
            ..Default::default()
        };
        assert!(apply(&records, &state).is_empty());
    }

    #[test]
    fn test_result_is_ordered_subset() {
        let records = seed_records();
        let states = [
            query("t"),
            query("a"),
            FilterState {
                crop: CropFilter::Crop("Tomato".into()),
                ..Default::default()
            },
            FilterState {
                severity: SeverityFilter::Only(Severity::Severe),
                ..Default::default()
            },
        ];
        for state in &states {
            let ids: Vec<u32> = apply(&records, state).iter().map(|r| r.id).collect();
            assert!(ids.windows(2).all(|w| w[0] < w[1]), "order broken for {state:?}");
            assert!(ids.iter().all(|id| records.iter().any(|r| r.id == *id)));
        }
    }

    #[test]
    fn test_crop_options_first_occurrence() {
        let records = seed_records();
        let values: Vec<String> = crop_options(&records)
            .iter()
            .map(|o| o.value().to_string())
            .collect();
        assert_eq!(values, vec!["All", "Tomato", "Potato", "Corn"]);
    }

    #[test]
    fn test_severity_options_are_fixed() {
        let labels: Vec<String> = SeverityFilter::options().iter().map(|o| o.label()).collect();
        assert_eq!(
            labels,
            vec!["All Severity", "Severe Severity", "Moderate Severity", "Mild Severity"]
        );
        assert_eq!(crop_options(&[]), vec![CropFilter::All]);
    }

    #[test]
    fn test_option_round_trip() {
        assert_eq!(CropFilter::from_option("All"), CropFilter::All);
        assert_eq!(
            CropFilter::from_option("Tomato"),
            CropFilter::Crop("Tomato".into())
        );
        assert_eq!(
            SeverityFilter::from_option("Severe"),
            SeverityFilter::Only(Severity::Severe)
        );
        assert_eq!(SeverityFilter::from_option("bogus"), SeverityFilter::All);
        assert_eq!(CropFilter::Crop("Corn".into()).label(), "Corn Crops");
    }
}
