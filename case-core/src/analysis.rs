//! Canned analysis lookup
//!
//! Each category maps to a fixed report payload. No computation happens
//! here and nothing is persisted between calls; the lookup is a pure,
//! deterministic function kept as an enum-keyed match rather than any kind
//! of dispatch.

use serde::{Deserialize, Serialize};

/// Analysis category selector. Unrecognized selector strings fall back to
/// [`AnalysisCategory::General`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisCategory {
    BloodPattern,
    Fingerprint,
    BulletTrajectory,
    DigitalFootprint,
    General,
}

impl AnalysisCategory {
    /// Parse a client-supplied selector string
    #[must_use]
    pub fn from_selector(selector: &str) -> Self {
        match selector {
            "blood_pattern" => Self::BloodPattern,
            "fingerprint" => Self::Fingerprint,
            "bullet_trajectory" => Self::BulletTrajectory,
            "digital_footprint" => Self::DigitalFootprint,
            _ => Self::General,
        }
    }
}

/// A canned analysis result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub title: String,
    pub findings: Vec<String>,
    /// Fixed per category; never computed
    pub confidence: u8,
    pub recommendations: Vec<String>,
}

fn report(
    title: &str,
    findings: &[&str],
    confidence: u8,
    recommendations: &[&str],
) -> AnalysisReport {
    AnalysisReport {
        title: title.to_string(),
        findings: findings.iter().map(ToString::to_string).collect(),
        confidence,
        recommendations: recommendations.iter().map(ToString::to_string).collect(),
    }
}

/// Produce the fixed report for a category. Deterministic and stateless;
/// every call returns a fresh value that the caller may discard.
#[must_use]
pub fn run_analysis(category: AnalysisCategory) -> AnalysisReport {
    match category {
        AnalysisCategory::BloodPattern => report(
            "Blood Pattern Analysis",
            &[
                "Impact spatter detected",
                "Directionality: NW to SE",
                "Estimated velocity: Medium velocity impact",
            ],
            87,
            &["Check for weapon matching impact pattern", "Reconstruct victim position"],
        ),
        AnalysisCategory::Fingerprint => report(
            "Fingerprint Analysis",
            &[
                "6 points of comparison identified",
                "Match found in criminal database",
                "Right index finger",
            ],
            94,
            &["Suspect: John Doe (ID: CR-78432)", "Cross-reference with alibis"],
        ),
        AnalysisCategory::BulletTrajectory => report(
            "Bullet Trajectory Reconstruction",
            &[
                "Entry point: 5.2ft from ground",
                "Trajectory angle: 12 degrees downward",
                "Estimated shooter position: 15ft from victim",
            ],
            79,
            &[
                "Check for ballistic evidence at estimated position",
                "Review witness statements for shooter description",
            ],
        ),
        AnalysisCategory::DigitalFootprint => report(
            "Digital Footprint Analysis",
            &[
                "Encrypted communication detected",
                "VPN usage identified",
                "Data exfiltration pattern recognized",
            ],
            91,
            &["Request ISP records", "Check for malware on victim systems"],
        ),
        AnalysisCategory::General => report(
            "General Analysis",
            &["Multiple evidence points analyzed", "Pattern recognition complete"],
            75,
            &["Continue evidence collection", "Review preliminary findings"],
        ),
    }
}
