//! Batch validation report types.

use serde::Serialize;

use crate::error::ValidationError;

/// A candidate that failed validation.
///
/// Identified by its position in the batch; the password text is never kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct FailureEntry {
    /// Zero-based position of the candidate in the batch.
    pub index: usize,
    /// The first rule the candidate violated.
    pub kind: ValidationError,
    /// Human-readable description of `kind`.
    pub message: String,
}

/// Result of validating a batch of candidates with one policy.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct ValidationReport {
    /// Name of the policy every candidate was judged against.
    pub policy: String,
    /// Number of candidates evaluated.
    pub checked: usize,
    /// Number of candidates accepted.
    pub passed: usize,
    /// Number of candidates rejected.
    pub failed: usize,
    /// Whether every candidate was accepted.
    pub ok: bool,
    /// Rejected candidates in batch order.
    pub failures: Vec<FailureEntry>,
}

impl ValidationReport {
    /// Number of failures of the given kind.
    #[must_use]
    pub fn count_of(&self, kind: ValidationError) -> usize {
        self.failures.iter().filter(|f| f.kind == kind).count()
    }

    /// The failure recorded for the candidate at `index`, if it was rejected.
    #[must_use]
    pub fn failure_at(&self, index: usize) -> Option<&FailureEntry> {
        self.failures.iter().find(|f| f.index == index)
    }
}
