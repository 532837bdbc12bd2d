//! # Case Core - Forensic Case Tracking Core
//!
//! The domain core behind the forensic case service: in-memory record
//! keeping for cases, evidence, and collaboration logs, plus evidence file
//! intake and the canned analysis lookup.
//!
//! ## Quick Start
//!
//! ```rust
//! use case_core::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = CaseStore::new();
//! let case = store
//!     .create_case(
//!         NewCase {
//!             title: "Warehouse break-in".into(),
//!             date: "2024-05-01".into(),
//!             ..NewCase::default()
//!         },
//!         "Det. Reyes",
//!     )
//!     .await;
//! assert_eq!(case.evidence_count, 0);
//! # }
//! ```
//!
//! ## Features
//!
//! - **In-Memory Storage**: all records live for the process lifetime only
//! - **Evidence Intake**: extension allow-list, filename sanitization,
//!   collision-resistant stored names
//! - **Canned Analysis**: fixed report payloads keyed by category
//! - **Single Lock Domain**: one lock guards every collection and the
//!   identifier assignment

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms, future_incompatible)]

pub mod analysis;
pub mod coordinator;
pub mod error;
pub mod intake;
pub mod model;
pub mod store;

pub use error::{CaseError, Result};

/// Convenient re-exports for common use cases
pub mod prelude {
    pub use crate::analysis::{run_analysis, AnalysisCategory, AnalysisReport};
    pub use crate::coordinator::{submit, FilePayload, Submission, SubmissionOutcome};
    pub use crate::error::{CaseError, Result};
    pub use crate::intake::{FileIntake, StoredFile};
    pub use crate::model::{Case, CollaborationLog, Evidence, EvidenceKind};
    pub use crate::store::{CaseStore, NewCase, NewEvidence};
}
