//! Activation domain module.
//!
//! Everything the merchant activation (KYC) wizard needs on the client side:
//! the accumulated draft aggregate, the step enum, per-step validation
//! schemas, the pure state machine driving step transitions, and the
//! flattened request sent on final submission.

pub mod calling_code;
pub mod data;
pub mod request;
pub mod state_machine;
pub mod status;
pub mod step;
pub mod validate;

pub use calling_code::{suggest_calling_codes, CallingCode};
pub use data::{ActivationData, DocumentKind, StepInput};
pub use request::ActivationRequest;
pub use state_machine::{WizardAction, WizardEvent, WizardState, WizardStateMachine};
pub use status::ActivationStatus;
pub use step::WizardStep;
pub use validate::{BusinessDetailsInput, DocumentsInput, SignatoryInput};
