//! Wizard snapshot DTO.

use serde::Serialize;

use mp_core::activation::{ActivationData, WizardState, WizardStep};

/// Read-only view of the wizard for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardSnapshot {
    pub step: WizardStep,
    pub data: ActivationData,
    /// True while a final submission is outstanding; the submit affordance
    /// is disabled during that window.
    pub submitting: bool,
}

impl WizardSnapshot {
    pub fn from_state(state: &WizardState, submitting: bool) -> Self {
        WizardSnapshot {
            step: state.step,
            data: state.data.clone(),
            submitting,
        }
    }
}
