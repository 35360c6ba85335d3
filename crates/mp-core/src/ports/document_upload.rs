//! Document upload port.
//!
//! The uploader returns an opaque stored-file reference per document type.
//! Failures are an explicit error channel so callers can distinguish
//! "pending" from "failed" from "succeeded".

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

use crate::activation::DocumentKind;
use crate::ids::OrganizationId;

/// Opaque reference to a previously uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileRef(String);

impl FileRef {
    pub fn new(reference: impl Into<String>) -> Self {
        FileRef(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for FileRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("upload transport failed: {0}")]
    Transport(String),

    #[error("upload rejected: {0}")]
    Rejected(String),
}

#[async_trait]
pub trait DocumentUploadPort: Send + Sync {
    /// Upload a document payload for the owning organization and return the
    /// stored-file reference.
    async fn upload(
        &self,
        kind: DocumentKind,
        organization: &OrganizationId,
        payload: &[u8],
    ) -> Result<FileRef, UploadError>;
}
