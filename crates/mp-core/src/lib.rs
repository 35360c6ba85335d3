//! # mp-core
//!
//! Core domain models and business logic for the merchant portal.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod activation;
pub mod ids;
pub mod ports;

// Re-export commonly used types at the crate root
pub use activation::{
    ActivationData, ActivationRequest, ActivationStatus, DocumentKind, StepInput, WizardAction,
    WizardEvent, WizardState, WizardStateMachine, WizardStep,
};
pub use ids::{OrganizationId, SubjectId};
