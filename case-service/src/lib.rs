//! Forensic Case Service Library
//!
//! Axum HTTP surface over the `case-core` domain: case intake with evidence
//! uploads, evidence queries, canned analysis, and collaboration logs.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms, future_incompatible)]

use case_core::intake::FileIntake;
use case_core::store::CaseStore;

pub mod app;
pub mod case_api;
pub mod config;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: CaseStore,
    pub intake: FileIntake,
}

impl AppState {
    #[must_use]
    pub fn new(store: CaseStore, intake: FileIntake) -> Self {
        Self { store, intake }
    }
}
