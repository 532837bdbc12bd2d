//! One-shot intake of a case and its evidence files
//!
//! A submission may carry a new-case payload, any number of evidence files,
//! or both. Files are processed independently: a rejected file never aborts
//! the rest of the submission, it is reported alongside the successes.

use serde::Serialize;
use tracing::{info, warn};

use crate::error::{CaseError, Result};
use crate::intake::FileIntake;
use crate::model::{Case, Evidence, EvidenceKind};
use crate::store::{CaseStore, NewCase, NewEvidence, DEFAULT_USER};

/// A single uploaded file within a submission
#[derive(Debug, Clone)]
pub struct FilePayload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// One form submission: an optional new case plus any number of evidence
/// files sharing one notes field
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub case: Option<NewCase>,
    /// Explicit target for evidence when no case is created in this
    /// submission
    pub case_id: Option<String>,
    pub files: Vec<FilePayload>,
    pub notes: String,
    pub submitted_by: Option<String>,
}

/// A file that failed validation, with the reason reported to the caller
#[derive(Debug, Clone, Serialize)]
pub struct RejectedFile {
    pub name: String,
    pub reason: String,
}

/// Everything one submission produced
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case: Option<Case>,
    pub evidence: Vec<Evidence>,
    pub rejected: Vec<RejectedFile>,
}

fn validate_new_case(new_case: &NewCase) -> Result<()> {
    if new_case.title.trim().is_empty() {
        return Err(CaseError::InvalidCaseInput { reason: "title is required".to_string() });
    }
    if new_case.date.trim().is_empty() {
        return Err(CaseError::InvalidCaseInput { reason: "date is required".to_string() });
    }
    Ok(())
}

/// Process one submission against the injected store and intake.
///
/// Evidence needs a parent reference up front: either the case created in
/// this submission or an explicit `case_id`. Earlier revisions fell back to
/// a hardcoded placeholder case here, which could silently attach files to
/// an unrelated investigation; a files-only submission without a reference
/// is now rejected with [`CaseError::MissingCaseReference`]. The referenced
/// case is still not required to exist: evidence against an unknown case is
/// stored and simply updates no counter.
pub async fn submit(
    store: &CaseStore,
    intake: &FileIntake,
    submission: Submission,
) -> Result<SubmissionOutcome> {
    let submitter =
        submission.submitted_by.as_deref().filter(|s| !s.is_empty()).unwrap_or(DEFAULT_USER);

    let mut created_case = None;
    if let Some(new_case) = submission.case {
        validate_new_case(&new_case)?;
        let case = store.create_case(new_case, submitter).await;
        info!(case_id = %case.id, officer = %submitter, "case created");
        created_case = Some(case);
    }

    let target_case_id = match (&created_case, &submission.case_id) {
        (Some(case), _) => Some(case.id.clone()),
        (None, Some(case_id)) if !case_id.trim().is_empty() => {
            Some(case_id.trim().to_string())
        }
        _ => None,
    };

    let files: Vec<FilePayload> =
        submission.files.into_iter().filter(|file| !file.file_name.is_empty()).collect();
    if !files.is_empty() && target_case_id.is_none() {
        return Err(CaseError::MissingCaseReference);
    }

    let mut evidence = Vec::new();
    let mut rejected = Vec::new();
    for file in files {
        match intake.save(&file.file_name, &file.bytes).await {
            Ok(stored) => {
                let kind = EvidenceKind::from_name(&stored.display_name)
                    .unwrap_or(EvidenceKind::Document);
                let case_id = target_case_id.clone().unwrap_or_default();
                let record = store
                    .add_evidence(NewEvidence {
                        case_id,
                        name: stored.display_name,
                        kind,
                        collected_by: submitter.to_string(),
                        notes: submission.notes.clone(),
                        stored_filename: Some(stored.stored_name),
                    })
                    .await;
                info!(evidence_id = %record.id, case_id = %record.case_id, "evidence recorded");
                evidence.push(record);
            }
            Err(err) => {
                warn!(file = %file.file_name, reason = %err, "evidence file rejected");
                rejected.push(RejectedFile { name: file.file_name, reason: err.to_string() });
            }
        }
    }

    Ok(SubmissionOutcome { case: created_case, evidence, rejected })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::DEFAULT_MAX_UPLOAD_BYTES;

    fn test_intake(dir: &std::path::Path) -> FileIntake {
        FileIntake::new(dir, DEFAULT_MAX_UPLOAD_BYTES)
    }

    fn new_case() -> NewCase {
        NewCase {
            title: "Warehouse break-in".to_string(),
            date: "2024-05-01".to_string(),
            location: Some("Pier 4".to_string()),
            description: Some("Forced entry through loading dock".to_string()),
        }
    }

    fn file(name: &str) -> FilePayload {
        FilePayload { file_name: name.to_string(), bytes: b"bytes".to_vec() }
    }

    #[tokio::test]
    async fn case_with_three_files_counts_three_evidence() {
        let dir = tempfile::tempdir().unwrap();
        let store = CaseStore::new();

        let outcome = submit(
            &store,
            &test_intake(dir.path()),
            Submission {
                case: Some(new_case()),
                files: vec![file("a.png"), file("b.jpg"), file("c.pdf")],
                notes: "from the scene".to_string(),
                ..Submission::default()
            },
        )
        .await
        .unwrap();

        let case = outcome.case.unwrap();
        assert_eq!(outcome.evidence.len(), 3);
        assert!(outcome.rejected.is_empty());

        let stored = store.find_case(&case.id).await.unwrap();
        assert_eq!(stored.evidence_count, 3);
        assert!(stored.last_updated >= case.last_updated);
        for record in &outcome.evidence {
            assert_eq!(record.case_id, case.id);
            assert_eq!(record.notes, "from the scene");
        }
    }

    #[tokio::test]
    async fn rejected_file_does_not_abort_the_submission() {
        let dir = tempfile::tempdir().unwrap();
        let store = CaseStore::new();

        let outcome = submit(
            &store,
            &test_intake(dir.path()),
            Submission {
                case: Some(new_case()),
                files: vec![file("scene.png"), file("payload.exe")],
                ..Submission::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(outcome.evidence.len(), 1);
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.rejected[0].name, "payload.exe");
        assert_eq!(store.find_case(&outcome.case.unwrap().id).await.unwrap().evidence_count, 1);
    }

    #[tokio::test]
    async fn empty_title_is_invalid_and_appends_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = CaseStore::new();

        let result = submit(
            &store,
            &test_intake(dir.path()),
            Submission {
                case: Some(NewCase { title: "  ".to_string(), date: "2024-05-01".to_string(), ..NewCase::default() }),
                files: vec![file("scene.png")],
                ..Submission::default()
            },
        )
        .await;

        assert!(matches!(result, Err(CaseError::InvalidCaseInput { .. })));
        assert_eq!(store.counts().await, (0, 0, 0));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn files_only_submission_requires_a_case_reference() {
        let dir = tempfile::tempdir().unwrap();
        let store = CaseStore::new();

        let result = submit(
            &store,
            &test_intake(dir.path()),
            Submission { files: vec![file("scene.png")], ..Submission::default() },
        )
        .await;

        assert!(matches!(result, Err(CaseError::MissingCaseReference)));
        assert_eq!(store.counts().await, (0, 0, 0));
    }

    #[tokio::test]
    async fn explicit_case_id_attaches_evidence_to_an_existing_case() {
        let dir = tempfile::tempdir().unwrap();
        let store = CaseStore::new();
        let case = store.create_case(new_case(), "Det. Reyes").await;

        let outcome = submit(
            &store,
            &test_intake(dir.path()),
            Submission {
                case_id: Some(case.id.clone()),
                files: vec![file("followup.pdf")],
                submitted_by: Some("Det. Reyes".to_string()),
                ..Submission::default()
            },
        )
        .await
        .unwrap();

        assert!(outcome.case.is_none());
        assert_eq!(outcome.evidence[0].case_id, case.id);
        assert_eq!(outcome.evidence[0].collected_by, "Det. Reyes");
        assert_eq!(store.find_case(&case.id).await.unwrap().evidence_count, 1);
    }

    #[tokio::test]
    async fn unknown_case_reference_stores_evidence_without_a_counter() {
        let dir = tempfile::tempdir().unwrap();
        let store = CaseStore::new();

        let outcome = submit(
            &store,
            &test_intake(dir.path()),
            Submission {
                case_id: Some("CASE-777".to_string()),
                files: vec![file("orphan.png")],
                ..Submission::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(outcome.evidence.len(), 1);
        assert_eq!(store.list_evidence(Some("CASE-777")).await.len(), 1);
    }

    #[tokio::test]
    async fn empty_file_parts_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let store = CaseStore::new();

        let outcome = submit(
            &store,
            &test_intake(dir.path()),
            Submission {
                case: Some(new_case()),
                files: vec![FilePayload { file_name: String::new(), bytes: Vec::new() }],
                ..Submission::default()
            },
        )
        .await
        .unwrap();

        assert!(outcome.evidence.is_empty());
        assert!(outcome.rejected.is_empty());
    }
}
