//! Merchant portal application layer.
//!
//! This crate contains the use cases orchestrating the activation wizard:
//! validation, step transitions, persistence, status reconciliation and
//! final submission. All infrastructure is injected through the port traits
//! defined in `mp-core`.

pub mod usecases;

pub use usecases::activation::{ActivationWizard, Confirmation, WizardError, WizardSnapshot};
