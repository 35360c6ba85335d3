//! HTTP adapters for the backend RPC surface.
//!
//! Every remote operation of the portal goes through a single
//! `rpc(method, params)` envelope; the backend answers with either a data
//! payload or an error string. Document uploads use a dedicated endpoint
//! and carry the payload base64-encoded.
//!
//! No request timeout is configured; a hung call leaves the caller in its
//! loading state (see DESIGN.md).

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use mp_core::activation::{ActivationRequest, ActivationStatus, DocumentKind};
use mp_core::ids::{OrganizationId, SubjectId};
use mp_core::ports::{
    ActivationBackendPort, BackendError, DocumentUploadPort, FileRef, UploadError,
};

use crate::config::PortalConfig;

#[derive(Debug, Serialize)]
struct RpcEnvelope<'a> {
    method: &'a str,
    params: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<String>,
}

/// RPC client for the activation backend.
pub struct HttpActivationBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpActivationBackend {
    pub fn new(config: &PortalConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config.api_base_url.clone())
    }

    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    async fn rpc<T: DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<T, BackendError> {
        debug!(method, "dispatching rpc call");

        let response = self
            .client
            .post(format!("{}/rpc", self.base_url))
            .json(&RpcEnvelope { method, params })
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Transport(format!(
                "backend answered {status} for {method}"
            )));
        }

        let body: RpcResponse = response
            .json()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        if let Some(error) = body.error {
            return Err(BackendError::Rejected(error));
        }

        let data = body.data.unwrap_or(serde_json::Value::Null);
        serde_json::from_value(data).map_err(|e| {
            BackendError::Transport(format!("malformed response for {method}: {e}"))
        })
    }
}

#[derive(Debug, Deserialize)]
struct StatusPayload {
    status: ActivationStatus,
}

#[async_trait]
impl ActivationBackendPort for HttpActivationBackend {
    async fn activation_status(
        &self,
        subject: &SubjectId,
    ) -> Result<ActivationStatus, BackendError> {
        let payload: StatusPayload = self
            .rpc(
                "merchant.activation.status",
                json!({ "subject": subject }),
            )
            .await?;
        Ok(payload.status)
    }

    async fn submit_activation(
        &self,
        subject: &SubjectId,
        request: &ActivationRequest,
    ) -> Result<(), BackendError> {
        // Success carries no structured payload beyond the error indicator.
        let _: serde_json::Value = self
            .rpc(
                "merchant.activation.submit",
                json!({ "subject": subject, "activation": request }),
            )
            .await?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    reference: String,
}

/// HTTP adapter for the document upload collaborator.
pub struct HttpDocumentUploader {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDocumentUploader {
    pub fn new(config: &PortalConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config.api_base_url.clone())
    }

    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl DocumentUploadPort for HttpDocumentUploader {
    async fn upload(
        &self,
        kind: DocumentKind,
        organization: &OrganizationId,
        payload: &[u8],
    ) -> Result<FileRef, UploadError> {
        debug!(document = kind.field_name(), %organization, "uploading document");

        let response = self
            .client
            .post(format!("{}/uploads", self.base_url))
            .json(&json!({
                "document_type": kind.field_name(),
                "organization": organization,
                "content": BASE64.encode(payload),
            }))
            .send()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UploadError::Rejected(format!("uploader answered {status}")));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        Ok(FileRef::new(body.reference))
    }
}
