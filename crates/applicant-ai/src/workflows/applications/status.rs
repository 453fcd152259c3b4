//! The application status machine.
//!
//! Engine-reachable transitions are `Pending -> {Submitted, Failed}` only.
//! `Interview` and `Rejected` are assigned by people or downstream systems
//! and are terminal from the engine's perspective. The machine itself is
//! stateless: it maps a submitter outcome to a status and nothing else.

use serde::{Deserialize, Serialize};

/// Lifecycle status of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Submitted,
    Failed,
    Interview,
    Rejected,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Submitted => "submitted",
            ApplicationStatus::Failed => "failed",
            ApplicationStatus::Interview => "interview",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    /// States only external actors may assign; the engine never produces
    /// them and never moves past them.
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            ApplicationStatus::Interview | ApplicationStatus::Rejected
        )
    }

    /// Total translation of a submitter outcome. Re-running submit feeds a
    /// fresh outcome through here; there is no internal retry.
    pub fn from_outcome(outcome: &SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::Success => ApplicationStatus::Submitted,
            SubmissionOutcome::Failure { .. } => ApplicationStatus::Failed,
        }
    }
}

/// A submitter's immediate result, prior to status translation. Submitters
/// always return one of these; session errors never escape them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    Failure { reason: String },
}

impl SubmissionOutcome {
    pub fn failure(reason: impl Into<String>) -> Self {
        Self::Failure {
            reason: reason.into(),
        }
    }
}
