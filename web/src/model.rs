//! Shared data-transfer objects used by both server and client.

use serde::{Deserialize, Serialize};

// ─── Site ────────────────────────────────────────────────────────────────────

/// Site-wide details shown in the navigation bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteInfo {
    pub title: String,
    pub disease_count: usize,
}

// ─── Diagnosis ───────────────────────────────────────────────────────────────

/// A leaf photo submitted for diagnosis during the current session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisRequest {
    pub id: u32,
    pub crop: String,
    pub image_name: String,
    pub notes: String,
}
