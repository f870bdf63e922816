//! Disease record types and the built-in seed dataset.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─── Severity ────────────────────────────────────────────────────────────────

/// How damaging a disease is to the host crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Severe,
    Moderate,
    Mild,
}

impl Severity {
    /// All severities, most damaging first.
    pub const ALL: [Severity; 3] = [Severity::Severe, Severity::Moderate, Severity::Mild];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Severe => "Severe",
            Severity::Moderate => "Moderate",
            Severity::Mild => "Mild",
        }
    }

    /// CSS class for the coloured severity badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Severity::Severe => "severity-badge severity-severe",
            Severity::Moderate => "severity-badge severity-moderate",
            Severity::Mild => "severity-badge severity-mild",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of `Severe`, `Moderate` or `Mild`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown severity `{0}`")]
pub struct UnknownSeverity(pub String);

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Severe" => Ok(Severity::Severe),
            "Moderate" => Ok(Severity::Moderate),
            "Mild" => Ok(Severity::Mild),
            other => Err(UnknownSeverity(other.to_string())),
        }
    }
}

// ─── Record ──────────────────────────────────────────────────────────────────

/// One entry of the disease database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    pub id: u32,
    pub name: String,
    #[serde(alias = "scientific")]
    pub scientific_name: String,
    pub crop: String,
    pub severity: Severity,
    /// Detection accuracy range as displayed, e.g. `"92-96%"`.
    pub confidence: String,
    #[serde(alias = "image")]
    pub image_url: String,
    pub symptoms: Vec<String>,
    #[serde(alias = "treatment")]
    pub treatments: Vec<String>,
    pub prevention: Vec<String>,
    pub season: String,
    pub spread: String,
}

impl DiseaseRecord {
    /// Case-insensitive substring search over name, scientific name and crop.
    ///
    /// `needle` must already be lower-cased.
    pub fn mentions(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.scientific_name.to_lowercase().contains(needle)
            || self.crop.to_lowercase().contains(needle)
    }
}

impl fmt::Display for DiseaseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Disease({}, {} / {}, {}, {})",
            self.id, self.name, self.scientific_name, self.crop, self.severity
        )
    }
}

// ─── Seed data ───────────────────────────────────────────────────────────────

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The records shipped with the application.
pub fn seed_records() -> Vec<DiseaseRecord> {
    vec![
        DiseaseRecord {
            id: 1,
            name: "Early Blight".into(),
            scientific_name: "Alternaria solani".into(),
            crop: "Tomato".into(),
            severity: Severity::Moderate,
            confidence: "92-96%".into(),
            image_url: "https://via.placeholder.com/400x300/10b981/ffffff?text=Early+Blight".into(),
            symptoms: lines(&[
                "Round brown spots with concentric target-like rings on older leaves",
                "Yellowing around the spots",
                "Leaf drop in severe cases",
                "Dark lesions on stems and fruit",
            ]),
            treatments: lines(&[
                "Remove and destroy affected leaves immediately",
                "Apply copper-based fungicide every 7-10 days",
                "Improve air circulation by proper spacing",
                "Avoid overhead watering",
                "Rotate crops annually",
            ]),
            prevention: lines(&[
                "Use disease-resistant varieties",
                "Mulch around plants to prevent soil splash",
                "Water at the base of plants",
                "Remove plant debris at end of season",
            ]),
            season: "Mid-summer, hot weather (77-86°F)".into(),
            spread: "Fungal spores spread by wind, rain, and contaminated tools".into(),
        },
        DiseaseRecord {
            id: 2,
            name: "Late Blight".into(),
            scientific_name: "Phytophthora infestans".into(),
            crop: "Tomato".into(),
            severity: Severity::Severe,
            confidence: "94-98%".into(),
            image_url: "https://via.placeholder.com/400x300/ef4444/ffffff?text=Late+Blight".into(),
            symptoms: lines(&[
                "Dark water-soaked spots that enlarge rapidly",
                "White fuzzy mold on leaf undersides",
                "Brown lesions on stems",
                "Firm brown rot on fruit",
                "Entire plant can collapse within days",
            ]),
            treatments: lines(&[
                "Immediate removal and destruction of infected plants",
                "Apply fungicide containing chlorothalonil or mancozeb",
                "Avoid overhead watering completely",
                "Increase spacing between plants",
                "Do not compost infected material",
            ]),
            prevention: lines(&[
                "Plant certified disease-free seeds",
                "Avoid planting near potatoes",
                "Ensure good drainage",
                "Monitor weather for cool, wet conditions",
            ]),
            season: "Cool, wet weather (60-70°F with high humidity)".into(),
            spread: "Highly contagious, spreads via wind-borne spores and water".into(),
        },
        DiseaseRecord {
            id: 3,
            name: "Potato Virus Y".into(),
            scientific_name: "PVY".into(),
            crop: "Potato".into(),
            severity: Severity::Severe,
            confidence: "87-93%".into(),
            image_url: "https://via.placeholder.com/400x300/f59e0b/ffffff?text=Potato+Virus+Y"
                .into(),
            symptoms: lines(&[
                "Yellow mottling and mosaic patterns on leaves",
                "Leaf distortion and curling",
                "Stunted plant growth",
                "Tuber necrosis (brown spots inside)",
                "Reduced yield by up to 80%",
            ]),
            treatments: lines(&[
                "No cure available - remove infected plants",
                "Control aphid populations with insecticides",
                "Use reflective mulches to deter aphids",
                "Destroy volunteer potato plants",
                "Sanitize tools between plants",
            ]),
            prevention: lines(&[
                "Use certified virus-free seed potatoes",
                "Plant resistant varieties",
                "Control aphid vectors early in season",
                "Remove infected plants immediately",
                "Maintain weed-free fields",
            ]),
            season: "Throughout growing season, peak in warm weather".into(),
            spread: "Transmitted by aphids and mechanical contact".into(),
        },
        DiseaseRecord {
            id: 4,
            name: "Stewart's Wilt".into(),
            scientific_name: "Erwinia stewartii".into(),
            crop: "Corn".into(),
            severity: Severity::Moderate,
            confidence: "84-90%".into(),
            image_url: "https://via.placeholder.com/400x300/8b5cf6/ffffff?text=Stewarts+Wilt"
                .into(),
            symptoms: lines(&[
                "Long, pale green to yellow streaks on leaves",
                "Leaf wilting and drying",
                "Bacterial ooze visible in morning",
                "Stunted plant growth",
                "Premature death in severe cases",
            ]),
            treatments: lines(&[
                "Plant resistant hybrid varieties",
                "Control corn flea beetles with insecticides",
                "Remove and destroy infected plants",
                "Avoid planting in fields with history of disease",
                "Use crop rotation with non-host crops",
            ]),
            prevention: lines(&[
                "Use treated seeds",
                "Plant after soil warms (above 65°F)",
                "Control flea beetle populations",
                "Choose resistant hybrids",
                "Avoid early planting in endemic areas",
            ]),
            season: "Early to mid-season, warm weather".into(),
            spread: "Transmitted by corn flea beetles and contaminated seeds".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_parse_and_display() {
        for sev in Severity::ALL {
            assert_eq!(sev.as_str().parse::<Severity>().unwrap(), sev);
            assert_eq!(sev.to_string(), sev.as_str());
        }
        assert!("severe".parse::<Severity>().is_err());
    }

    #[test]
    fn test_unknown_severity_display() {
        let err = "Critical".parse::<Severity>().unwrap_err();
        assert_eq!(err, UnknownSeverity("Critical".into()));
        assert_eq!(err.to_string(), "unknown severity `Critical`");
        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.to_string().contains("Critical"));
    }

    #[test]
    fn test_record_accepts_original_export_keys() {
        let json = r#"{
            "id": 9,
            "name": "Leaf Rust",
            "scientific": "Puccinia triticina",
            "crop": "Wheat",
            "severity": "Mild",
            "confidence": "80-88%",
            "image": "https://example.org/leaf-rust.png",
            "symptoms": ["Orange pustules on leaves"],
            "treatment": ["Apply a triazole fungicide"],
            "prevention": ["Plant resistant cultivars"],
            "season": "Cool, humid spring",
            "spread": "Wind-borne spores"
        }"#;
        let record: DiseaseRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.scientific_name, "Puccinia triticina");
        assert_eq!(record.image_url, "https://example.org/leaf-rust.png");
        assert_eq!(record.treatments, vec!["Apply a triazole fungicide"]);
        assert_eq!(record.severity, Severity::Mild);

        // Serialised output keeps the Rust field names.
        let out = serde_json::to_string(&record).unwrap();
        assert!(out.contains("\"scientific_name\""));
    }

    #[test]
    fn test_severity_serde_uses_variant_names() {
        let json = serde_json::to_string(&Severity::Moderate).unwrap();
        assert_eq!(json, "\"Moderate\"");
        assert!(serde_json::from_str::<Severity>("\"Critical\"").is_err());
    }

    #[test]
    fn test_seed_records_are_complete() {
        let records = seed_records();
        assert_eq!(records.len(), 4);
        for r in &records {
            assert!(!r.name.is_empty());
            assert!(!r.crop.is_empty());
            assert!(!r.symptoms.is_empty());
            assert!(!r.treatments.is_empty());
        }
        assert!(records.iter().all(|r| r.severity != Severity::Mild));
    }

    #[test]
    fn test_mentions_is_case_insensitive() {
        let records = seed_records();
        let late = &records[1];
        assert!(late.mentions("phytophthora"));
        assert!(late.mentions("tomato"));
        assert!(late.mentions(""));
        assert!(!late.mentions("corn"));
    }
}
