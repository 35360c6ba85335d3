//! Activation status reported by the backend.

use serde::{Deserialize, Serialize};

/// Coarse activation state for a subject, as reported by the status oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationStatus {
    /// No activation request has been submitted yet.
    NotSubmitted,
    /// A submission exists and is awaiting verification.
    Pending,
    /// The subject is not allowed to run the activation flow.
    NotAuthorized,
    /// The merchant account is fully approved.
    Approved,
    /// The last submission was rejected.
    Rejected,
}
