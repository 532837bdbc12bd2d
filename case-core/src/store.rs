//! In-memory record store for cases, evidence, and collaboration logs
//!
//! All three collections share a single lock. Identifier assignment reads
//! the collection length, so record creation is a read-modify-write that
//! must be serialized (see [`next_id`]). State resets on process restart.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use tokio::sync::RwLock;

use crate::model::{
    Case, CasePriority, CaseStatus, CollaborationLog, Evidence, EvidenceKind, EvidenceStatus,
};

/// Name recorded for submissions without an identity attached
pub const DEFAULT_USER: &str = "User";

/// Input payload for creating a case
#[derive(Debug, Clone, Default)]
pub struct NewCase {
    pub title: String,
    pub date: String,
    pub location: Option<String>,
    pub description: Option<String>,
}

/// Input payload for appending an evidence record
#[derive(Debug, Clone)]
pub struct NewEvidence {
    pub case_id: String,
    pub name: String,
    pub kind: EvidenceKind,
    pub collected_by: String,
    pub notes: String,
    pub stored_filename: Option<String>,
}

#[derive(Debug, Default)]
struct Records {
    cases: Vec<Case>,
    evidence: Vec<Evidence>,
    logs: Vec<CollaborationLog>,
}

/// Identifier suffix is the collection length at creation time plus 100.
/// Records are never removed, so suffixes stay unique and strictly
/// increasing; any future delete path must switch to a dedicated counter
/// before reusing this scheme.
fn next_id(prefix: &str, len: usize) -> String {
    format!("{prefix}-{:03}", len + 100)
}

/// The record store. Cheap to clone; clones share the same records.
#[derive(Clone, Default)]
pub struct CaseStore {
    records: Arc<RwLock<Records>>,
}

impl CaseStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the demonstration records
    #[must_use]
    pub fn with_sample_data() -> Self {
        let mut records = Records::default();
        records.seed_samples();
        Self { records: Arc::new(RwLock::new(records)) }
    }

    /// Append a new case. Status, priority, and counters take their intake
    /// defaults; the identifier is assigned under the write guard.
    pub async fn create_case(&self, new_case: NewCase, officer: &str) -> Case {
        let mut records = self.records.write().await;
        let case = Case {
            id: next_id("CASE", records.cases.len()),
            title: new_case.title,
            date: new_case.date,
            status: CaseStatus::Active,
            location: new_case.location.unwrap_or_default(),
            officer: officer.to_string(),
            priority: CasePriority::Medium,
            evidence_count: 0,
            last_updated: Utc::now(),
            description: new_case.description,
        };
        records.cases.push(case.clone());
        case
    }

    /// Append an evidence record and, when the parent case exists, bump its
    /// `evidence_count` and `last_updated` under the same write guard. The
    /// evidence is kept either way; a dangling `case_id` is not an error.
    pub async fn add_evidence(&self, new_evidence: NewEvidence) -> Evidence {
        let mut records = self.records.write().await;
        let evidence = Evidence {
            id: next_id("EVD", records.evidence.len()),
            case_id: new_evidence.case_id,
            name: new_evidence.name,
            kind: new_evidence.kind,
            date_collected: Utc::now(),
            collected_by: new_evidence.collected_by,
            status: EvidenceStatus::Uploaded,
            notes: new_evidence.notes,
            stored_filename: new_evidence.stored_filename,
        };
        records.evidence.push(evidence.clone());
        if let Some(case) = records.cases.iter_mut().find(|case| case.id == evidence.case_id) {
            case.evidence_count += 1;
            case.last_updated = Utc::now();
        }
        evidence
    }

    /// Append a collaboration log entry with a fresh identifier and the
    /// current timestamp. The referenced case is not checked for existence.
    pub async fn append_log(
        &self,
        case_id: &str,
        user: &str,
        action: &str,
        details: &str,
    ) -> CollaborationLog {
        let mut records = self.records.write().await;
        let log = CollaborationLog {
            id: next_id("LOG", records.logs.len()),
            case_id: case_id.to_string(),
            user: user.to_string(),
            action: action.to_string(),
            timestamp: Utc::now(),
            details: details.to_string(),
        };
        records.logs.push(log.clone());
        log
    }

    /// All cases in insertion order
    pub async fn list_cases(&self) -> Vec<Case> {
        self.records.read().await.cases.clone()
    }

    /// Look up a case by identifier
    pub async fn find_case(&self, case_id: &str) -> Option<Case> {
        self.records.read().await.cases.iter().find(|case| case.id == case_id).cloned()
    }

    /// Evidence in insertion order, optionally filtered by `case_id`.
    /// A filter with no matches yields an empty list, never an error.
    pub async fn list_evidence(&self, case_id: Option<&str>) -> Vec<Evidence> {
        let records = self.records.read().await;
        match case_id {
            Some(case_id) => records
                .evidence
                .iter()
                .filter(|evidence| evidence.case_id == case_id)
                .cloned()
                .collect(),
            None => records.evidence.clone(),
        }
    }

    /// All collaboration logs in insertion order
    pub async fn list_logs(&self) -> Vec<CollaborationLog> {
        self.records.read().await.logs.clone()
    }

    /// Record counts: (cases, evidence, logs)
    pub async fn counts(&self) -> (usize, usize, usize) {
        let records = self.records.read().await;
        (records.cases.len(), records.evidence.len(), records.logs.len())
    }
}

fn demo_timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

impl Records {
    /// Demonstration data set. Counts are aligned with the seeded evidence
    /// records so the derived-counter invariant holds from the start.
    fn seed_samples(&mut self) {
        self.cases = vec![
            Case {
                id: "CASE-001".to_string(),
                title: "Bank Robbery - Downtown Branch".to_string(),
                date: "2024-03-15".to_string(),
                status: CaseStatus::Active,
                location: "123 Main St, Downtown".to_string(),
                officer: "Det. Sarah Miller".to_string(),
                priority: CasePriority::High,
                evidence_count: 2,
                last_updated: demo_timestamp(2024, 3, 20, 14, 30),
                description: None,
            },
            Case {
                id: "CASE-002".to_string(),
                title: "Art Gallery Theft".to_string(),
                date: "2024-03-10".to_string(),
                status: CaseStatus::UnderReview,
                location: "456 Art Ave, Uptown".to_string(),
                officer: "Det. James Wilson".to_string(),
                priority: CasePriority::Medium,
                evidence_count: 1,
                last_updated: demo_timestamp(2024, 3, 19, 9, 15),
                description: None,
            },
            Case {
                id: "CASE-003".to_string(),
                title: "Cyber Fraud Investigation".to_string(),
                date: "2024-03-05".to_string(),
                status: CaseStatus::Closed,
                location: "Virtual/Online".to_string(),
                officer: "Det. Alex Chen".to_string(),
                priority: CasePriority::High,
                evidence_count: 0,
                last_updated: demo_timestamp(2024, 3, 18, 16, 45),
                description: None,
            },
        ];
        self.evidence = vec![
            Evidence {
                id: "EVD-001".to_string(),
                case_id: "CASE-001".to_string(),
                name: "Surveillance Footage - Entrance".to_string(),
                kind: EvidenceKind::Video,
                date_collected: demo_timestamp(2024, 3, 15, 10, 30),
                collected_by: "Officer Rodriguez".to_string(),
                status: EvidenceStatus::Processed,
                notes: "Shows suspect entering bank".to_string(),
                stored_filename: None,
            },
            Evidence {
                id: "EVD-002".to_string(),
                case_id: "CASE-001".to_string(),
                name: "Fingerprint Sample A".to_string(),
                kind: EvidenceKind::Image,
                date_collected: demo_timestamp(2024, 3, 15, 11, 15),
                collected_by: "Forensic Tech Kim".to_string(),
                status: EvidenceStatus::Analyzed,
                notes: "Partial print from counter".to_string(),
                stored_filename: None,
            },
            Evidence {
                id: "EVD-003".to_string(),
                case_id: "CASE-002".to_string(),
                name: "Security System Logs".to_string(),
                kind: EvidenceKind::Document,
                date_collected: demo_timestamp(2024, 3, 10, 21, 0),
                collected_by: "Det. Wilson".to_string(),
                status: EvidenceStatus::Processing,
                notes: "System was tampered with".to_string(),
                stored_filename: None,
            },
        ];
        self.logs = vec![
            CollaborationLog {
                id: "LOG-001".to_string(),
                case_id: "CASE-001".to_string(),
                user: "Det. Sarah Miller".to_string(),
                action: "Added new evidence".to_string(),
                timestamp: demo_timestamp(2024, 3, 20, 14, 30),
                details: "Uploaded surveillance footage from ATM camera".to_string(),
            },
            CollaborationLog {
                id: "LOG-002".to_string(),
                case_id: "CASE-001".to_string(),
                user: "Forensic Analyst Chen".to_string(),
                action: "Completed analysis".to_string(),
                timestamp: demo_timestamp(2024, 3, 20, 10, 15),
                details: "Fingerprint match found in database".to_string(),
            },
        ];
    }
}
