//! Activation wizard use cases.

pub mod controller;
pub mod dto;

pub use controller::{ActivationWizard, Confirmation, WizardError};
pub use dto::WizardSnapshot;
