//! Wizard state machine.
//!
//! A pure state transition function for the activation wizard: no I/O, no
//! side effects. Transitions return the next state plus the storage actions
//! the caller must execute against the persisted slot.

use serde::{Deserialize, Serialize};

use crate::activation::data::{ActivationData, DocumentKind, StepInput};
use crate::activation::status::ActivationStatus;
use crate::activation::step::WizardStep;

/// The wizard's only shared mutable state: position plus draft aggregate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    pub step: WizardStep,
    pub data: ActivationData,
}

impl WizardState {
    pub fn new(step: WizardStep, data: ActivationData) -> Self {
        WizardState { step, data }
    }
}

/// Events that drive the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    /// A step's validated output; merges and moves forward.
    Advance(StepInput),
    /// Move back one step, aggregate untouched.
    Retreat,
    /// A stored-file reference arrived from the upload collaborator.
    DocumentStored {
        kind: DocumentKind,
        reference: String,
    },
    /// The status oracle reported a fresh activation status.
    StatusSynced(ActivationStatus),
}

/// Storage side-effects produced by transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    /// Write the new state to the persisted slot.
    Persist,
    /// Remove the persisted slot entirely.
    Clear,
}

/// Pure wizard state machine.
pub struct WizardStateMachine;

impl WizardStateMachine {
    pub fn transition(state: WizardState, event: WizardEvent) -> (WizardState, Vec<WizardAction>) {
        match event {
            WizardEvent::Advance(input) => {
                // Advancing from the terminal step is a no-op.
                if state.step.is_terminal() {
                    return (state, Vec::new());
                }
                let mut data = state.data;
                data.apply(&input);
                (
                    WizardState::new(state.step.next(), data),
                    vec![WizardAction::Persist],
                )
            }
            WizardEvent::Retreat => {
                if state.step == WizardStep::FIRST {
                    return (state, Vec::new());
                }
                (
                    WizardState::new(state.step.previous(), state.data),
                    vec![WizardAction::Persist],
                )
            }
            WizardEvent::DocumentStored { kind, reference } => {
                let mut data = state.data;
                data.set_document_reference(kind, reference);
                (
                    WizardState::new(state.step, data),
                    vec![WizardAction::Persist],
                )
            }
            WizardEvent::StatusSynced(status) => Self::apply_status(state, status),
        }
    }

    /// Status-driven override table, evaluated once per mount/status refresh.
    fn apply_status(state: WizardState, status: ActivationStatus) -> (WizardState, Vec<WizardAction>) {
        match status {
            ActivationStatus::NotSubmitted => {
                // Only an empty aggregate is reset; repeated checks are no-ops.
                if !state.data.is_empty() {
                    return (state, Vec::new());
                }
                if state.step == WizardStep::FIRST {
                    return (state, Vec::new());
                }
                (WizardState::default(), vec![WizardAction::Clear])
            }
            ActivationStatus::Approved => {
                if state.step == WizardStep::Activated {
                    return (state, Vec::new());
                }
                (
                    WizardState::new(WizardStep::Activated, state.data),
                    vec![WizardAction::Persist],
                )
            }
            ActivationStatus::Pending => {
                if state.step == WizardStep::Verification {
                    return (state, Vec::new());
                }
                (
                    WizardState::new(WizardStep::Verification, state.data),
                    vec![WizardAction::Persist],
                )
            }
            ActivationStatus::Rejected => {
                // The aggregate is cleared but the step index is left
                // untouched; see DESIGN.md.
                if state.data.is_empty() {
                    return (state, Vec::new());
                }
                (
                    WizardState::new(state.step, ActivationData::default()),
                    vec![WizardAction::Persist],
                )
            }
            ActivationStatus::NotAuthorized => {
                if state == WizardState::default() {
                    return (state, Vec::new());
                }
                (WizardState::default(), vec![WizardAction::Clear])
            }
        }
    }
}
