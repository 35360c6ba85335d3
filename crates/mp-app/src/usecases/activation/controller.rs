//! Activation wizard controller.
//!
//! Owns the wizard's shared state, drives the pure state machine and
//! executes the storage actions it emits. Remote-call failures follow the
//! flow's error policy: the status oracle degrades silently to the last
//! persisted step, while a failed submission surfaces a destructive toast
//! and leaves the draft intact for retry.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use mp_core::activation::{
    ActivationRequest, DocumentKind, StepInput, WizardAction, WizardEvent, WizardState,
    WizardStateMachine, WizardStep,
};
use mp_core::ids::SubjectId;
use mp_core::ports::{
    ActivationBackendPort, FileRef, NotifierPort, UploadError, WizardStatePort,
};

use super::dto::WizardSnapshot;

/// Outcome of the confirmation dialog interposed before final submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Dismissed,
}

/// Errors surfaced to the caller of the wizard controller.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("step input failed validation")]
    Validation(#[from] validator::ValidationErrors),

    #[error("wizard state persistence failed: {0}")]
    Persistence(#[source] anyhow::Error),
}

/// Controller owning the wizard position and draft aggregate.
///
/// The state lives in a single slot guarded by one mutex; there is no
/// concurrent writer beyond the interleaved event handlers of the UI.
pub struct ActivationWizard {
    state: Mutex<WizardState>,
    store: Arc<dyn WizardStatePort>,
    backend: Arc<dyn ActivationBackendPort>,
    notifier: Arc<dyn NotifierPort>,
    submit_in_flight: AtomicBool,
}

impl ActivationWizard {
    pub fn new(
        store: Arc<dyn WizardStatePort>,
        backend: Arc<dyn ActivationBackendPort>,
        notifier: Arc<dyn NotifierPort>,
    ) -> Self {
        Self {
            state: Mutex::new(WizardState::default()),
            store,
            backend,
            notifier,
            submit_in_flight: AtomicBool::new(false),
        }
    }

    /// Rehydrate the wizard from the persisted slot, defaulting to the
    /// first step with an empty aggregate.
    pub async fn restore(&self) -> Result<WizardSnapshot, WizardError> {
        let restored = self
            .store
            .load()
            .await
            .map_err(WizardError::Persistence)?
            .unwrap_or_default();

        let mut state = self.state.lock().await;
        *state = restored;
        Ok(self.snapshot_of(&state))
    }

    /// Current view of the wizard.
    pub async fn snapshot(&self) -> WizardSnapshot {
        let state = self.state.lock().await;
        self.snapshot_of(&state)
    }

    /// Reconcile with the status oracle.
    ///
    /// An oracle failure is logged and swallowed; the wizard stays on the
    /// last persisted step and no toast is shown for this path.
    pub async fn sync_status(&self, subject: &SubjectId) -> Result<WizardSnapshot, WizardError> {
        match self.backend.activation_status(subject).await {
            Ok(status) => self.dispatch(WizardEvent::StatusSynced(status)).await,
            Err(error) => {
                warn!(%subject, %error, "activation status query failed; keeping last known step");
                Ok(self.snapshot().await)
            }
        }
    }

    /// Validate a step's output and, on success, merge it and move forward.
    ///
    /// Invalid input returns the step-local field errors; nothing is merged
    /// and nothing is persisted.
    pub async fn advance(&self, input: StepInput) -> Result<WizardSnapshot, WizardError> {
        input.validate()?;
        self.dispatch(WizardEvent::Advance(input)).await
    }

    /// Move back one step; the aggregate is untouched.
    pub async fn retreat(&self) -> Result<WizardSnapshot, WizardError> {
        self.dispatch(WizardEvent::Retreat).await
    }

    /// Record the outcome of a document upload.
    ///
    /// A successful upload stores the reference in the matching slot. A
    /// failed upload leaves the slot empty; the gap is surfaced at the
    /// submit gate, not here.
    pub async fn record_upload(
        &self,
        kind: DocumentKind,
        outcome: Result<FileRef, UploadError>,
    ) -> Result<WizardSnapshot, WizardError> {
        match outcome {
            Ok(reference) => {
                self.dispatch(WizardEvent::DocumentStored {
                    kind,
                    reference: reference.into_inner(),
                })
                .await
            }
            Err(error) => {
                warn!(document = kind.field_name(), %error, "document upload failed");
                Ok(self.snapshot().await)
            }
        }
    }

    /// Final submission of the assembled draft.
    ///
    /// Requires explicit confirmation and all three document references.
    /// Success forces the verification step; failure leaves step and
    /// aggregate unchanged so the user can retry without re-entering data.
    pub async fn submit(
        &self,
        subject: &SubjectId,
        confirmation: Confirmation,
    ) -> Result<WizardSnapshot, WizardError> {
        if confirmation == Confirmation::Dismissed {
            debug!("submission dismissed at the confirmation dialog");
            return Ok(self.snapshot().await);
        }

        let data = {
            let state = self.state.lock().await;
            let missing = state.data.missing_documents();
            if !missing.is_empty() {
                let names: Vec<&str> = missing.iter().map(|kind| kind.field_name()).collect();
                self.notifier
                    .destructive(&format!("missing documents: {}", names.join(", ")));
                return Ok(self.snapshot_of(&state));
            }
            state.data.clone()
        };

        // One submission at a time; the affordance is disabled meanwhile.
        if self.submit_in_flight.swap(true, Ordering::SeqCst) {
            debug!("submission already in flight");
            return Ok(self.snapshot().await);
        }

        let request = ActivationRequest::from_data(&data);
        let result = self.backend.submit_activation(subject, &request).await;
        self.submit_in_flight.store(false, Ordering::SeqCst);

        match result {
            Ok(()) => {
                self.notifier.success("activation submitted for verification");
                self.force_step(WizardStep::Verification).await
            }
            Err(error) => {
                warn!(%subject, %error, "activation submission failed");
                self.notifier
                    .destructive(&format!("activation submission failed: {error}"));
                Ok(self.snapshot().await)
            }
        }
    }

    async fn force_step(&self, step: WizardStep) -> Result<WizardSnapshot, WizardError> {
        let mut state = self.state.lock().await;
        if state.step != step {
            let next = WizardState::new(step, state.data.clone());
            self.store
                .save(&next)
                .await
                .map_err(WizardError::Persistence)?;
            *state = next;
        }
        Ok(self.snapshot_of(&state))
    }

    async fn dispatch(&self, event: WizardEvent) -> Result<WizardSnapshot, WizardError> {
        let mut state = self.state.lock().await;
        let (next, actions) = WizardStateMachine::transition(state.clone(), event);
        for action in actions {
            match action {
                WizardAction::Persist => self
                    .store
                    .save(&next)
                    .await
                    .map_err(WizardError::Persistence)?,
                WizardAction::Clear => self
                    .store
                    .clear()
                    .await
                    .map_err(WizardError::Persistence)?,
            }
        }
        *state = next;
        Ok(self.snapshot_of(&state))
    }

    fn snapshot_of(&self, state: &WizardState) -> WizardSnapshot {
        WizardSnapshot::from_state(state, self.submit_in_flight.load(Ordering::SeqCst))
    }
}
