//! Submission status state machine.

use serde::{Deserialize, Serialize};

/// The single authoritative status value owned by the orchestrator.
///
/// Legal transitions:
/// `idle → building → signing → submitting → success`, with `error`
/// reachable from any of the three in-flight states, and `idle` reachable
/// from `error` or `success` via [`reset`](crate::submission::SubmissionOrchestrator::reset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Building,
    Signing,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    /// True while a submission is in flight.
    pub fn is_processing(self) -> bool {
        matches!(
            self,
            SubmissionStatus::Building | SubmissionStatus::Signing | SubmissionStatus::Submitting
        )
    }

    /// True if a new submission may start from this state.
    ///
    /// Only `idle` and `error` accept a new attempt; `success` requires an
    /// explicit reset first so a completed result is never silently replaced.
    pub fn can_start(self) -> bool {
        matches!(self, SubmissionStatus::Idle | SubmissionStatus::Error)
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Building => "building",
            SubmissionStatus::Signing => "signing",
            SubmissionStatus::Submitting => "submitting",
            SubmissionStatus::Success => "success",
            SubmissionStatus::Error => "error",
        };
        write!(f, "{}", name)
    }
}
