//! Domain records: cases, evidence items, and collaboration logs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseStatus {
    Active,
    #[serde(rename = "Under Review")]
    UnderReview,
    Closed,
}

impl std::fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaseStatus::Active => write!(f, "Active"),
            CaseStatus::UnderReview => write!(f, "Under Review"),
            CaseStatus::Closed => write!(f, "Closed"),
        }
    }
}

/// Investigation priority of a case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CasePriority {
    Low,
    Medium,
    High,
}

/// Processing status of an evidence item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvidenceStatus {
    Uploaded,
    Processing,
    Analyzed,
    Processed,
}

/// Broad classification of an evidence item, derived from its file
/// extension for uploads or assigned directly for labeled records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvidenceKind {
    Image,
    Video,
    Document,
}

impl EvidenceKind {
    /// Classify by file extension (case-insensitive). Returns `None` for
    /// extensions outside the upload allow-list.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "png" | "jpg" | "jpeg" | "gif" => Some(Self::Image),
            "mp4" | "mov" | "avi" => Some(Self::Video),
            "pdf" | "txt" | "doc" | "docx" => Some(Self::Document),
            _ => None,
        }
    }

    /// Classify a filename by the substring after its last `.`.
    pub fn from_name(name: &str) -> Option<Self> {
        name.rsplit_once('.').and_then(|(_, extension)| Self::from_extension(extension))
    }
}

impl std::fmt::Display for EvidenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvidenceKind::Image => write!(f, "Image"),
            EvidenceKind::Video => write!(f, "Video"),
            EvidenceKind::Document => write!(f, "Document"),
        }
    }
}

/// A forensic investigation record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
    pub id: String,
    pub title: String,
    /// Incident date as supplied by the submitting form
    pub date: String,
    pub status: CaseStatus,
    pub location: String,
    pub officer: String,
    pub priority: CasePriority,
    /// Derived: number of evidence records whose `case_id` matches
    pub evidence_count: u32,
    /// Bumped on every mutation touching this case or its evidence
    pub last_updated: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A file or note attached to a case, with provenance metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evidence {
    pub id: String,
    /// Reference by identifier only; the parent case may not exist
    pub case_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EvidenceKind,
    pub date_collected: DateTime<Utc>,
    pub collected_by: String,
    pub status: EvidenceStatus,
    pub notes: String,
    /// On-disk name, present only for uploaded files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stored_filename: Option<String>,
}

/// A free-text audit entry describing an action taken on a case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollaborationLog {
    pub id: String,
    pub case_id: String,
    pub user: String,
    pub action: String,
    pub timestamp: DateTime<Utc>,
    pub details: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evidence_kind_covers_the_allow_list() {
        for extension in ["png", "jpg", "jpeg", "gif"] {
            assert_eq!(EvidenceKind::from_extension(extension), Some(EvidenceKind::Image));
        }
        for extension in ["mp4", "mov", "avi"] {
            assert_eq!(EvidenceKind::from_extension(extension), Some(EvidenceKind::Video));
        }
        for extension in ["pdf", "txt", "doc", "docx"] {
            assert_eq!(EvidenceKind::from_extension(extension), Some(EvidenceKind::Document));
        }
        assert_eq!(EvidenceKind::from_extension("exe"), None);
    }

    #[test]
    fn evidence_kind_is_case_insensitive() {
        assert_eq!(EvidenceKind::from_extension("PNG"), Some(EvidenceKind::Image));
        assert_eq!(EvidenceKind::from_name("scene.MOV"), Some(EvidenceKind::Video));
    }

    #[test]
    fn under_review_serializes_with_a_space() {
        let json = serde_json::to_string(&CaseStatus::UnderReview).unwrap();
        assert_eq!(json, "\"Under Review\"");
    }
}
