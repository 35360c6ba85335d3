//! Infrastructure adapters for the merchant portal.
//!
//! Concrete implementations of the `mp-core` ports: file-backed wizard
//! state, the HTTP RPC backend client, the document uploader and the
//! tracing-based notifier.

pub mod backend;
pub mod config;
pub mod notify;
pub mod wizard_state;

pub use backend::{HttpActivationBackend, HttpDocumentUploader};
pub use config::PortalConfig;
pub use notify::TracingNotifier;
pub use wizard_state::FileWizardStateRepository;
