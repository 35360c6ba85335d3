//! Port traits.
//!
//! Seams between the wizard's domain logic and the outside world: the
//! persisted slot, the backend RPC surface, the document uploader and the
//! notification (toast) surface. Implementations live in the infrastructure
//! layer; tests substitute in-memory fakes.

pub mod activation_backend;
pub mod document_upload;
pub mod notifier;
pub mod wizard_state;

pub use activation_backend::{ActivationBackendPort, BackendError};
pub use document_upload::{DocumentUploadPort, FileRef, UploadError};
pub use notifier::NotifierPort;
pub use wizard_state::WizardStatePort;
