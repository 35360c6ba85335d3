//! Activation backend port.
//!
//! The two remote calls the wizard makes: the status oracle query and the
//! final submission of the assembled draft.

use async_trait::async_trait;
use thiserror::Error;

use crate::activation::{ActivationRequest, ActivationStatus};
use crate::ids::SubjectId;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("rpc transport failed: {0}")]
    Transport(String),

    #[error("backend rejected the call: {0}")]
    Rejected(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[async_trait]
pub trait ActivationBackendPort: Send + Sync {
    /// Query the coarse activation status for a subject.
    async fn activation_status(
        &self,
        subject: &SubjectId,
    ) -> Result<ActivationStatus, BackendError>;

    /// Submit the complete activation request. No structured payload beyond
    /// success or an error indicator.
    async fn submit_activation(
        &self,
        subject: &SubjectId,
        request: &ActivationRequest,
    ) -> Result<(), BackendError>;
}
