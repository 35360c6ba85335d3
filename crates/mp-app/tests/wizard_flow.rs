//! End-to-end wizard flow against the real file-backed repository.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tempfile::TempDir;

use mp_app::{ActivationWizard, Confirmation};
use mp_core::activation::{
    ActivationRequest, ActivationStatus, BusinessDetailsInput, DocumentKind, SignatoryInput,
    StepInput, WizardStep,
};
use mp_core::ids::SubjectId;
use mp_core::ports::{ActivationBackendPort, BackendError, FileRef, NotifierPort, WizardStatePort};
use mp_infra::FileWizardStateRepository;

/// Backend stub whose reported status can be swapped between calls.
struct ScriptedBackend {
    status: std::sync::Mutex<ActivationStatus>,
    submit_calls: AtomicUsize,
}

impl ScriptedBackend {
    fn new(status: ActivationStatus) -> Self {
        Self {
            status: std::sync::Mutex::new(status),
            submit_calls: AtomicUsize::new(0),
        }
    }

    fn set_status(&self, status: ActivationStatus) {
        *self.status.lock().unwrap() = status;
    }
}

#[async_trait::async_trait]
impl ActivationBackendPort for ScriptedBackend {
    async fn activation_status(
        &self,
        _subject: &SubjectId,
    ) -> Result<ActivationStatus, BackendError> {
        Ok(*self.status.lock().unwrap())
    }

    async fn submit_activation(
        &self,
        _subject: &SubjectId,
        _request: &ActivationRequest,
    ) -> Result<(), BackendError> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Default)]
struct SilentNotifier;

impl NotifierPort for SilentNotifier {
    fn success(&self, _message: &str) {}
    fn destructive(&self, _message: &str) {}
}

fn business_details() -> StepInput {
    StepInput::BusinessDetails(BusinessDetailsInput {
        legal_name: "Kouassi Trading SARL".into(),
        description: "Import and wholesale distribution of agricultural equipment.".into(),
        country: "CI".into(),
        region: "Abidjan".into(),
        city: "Abidjan".into(),
        postal_code: "01 BP 1234".into(),
        street: "Rue des Jardins 12".into(),
        proof_of_business: "trade_register".into(),
        business_url: "https://kouassi-trading.ci".into(),
        ..Default::default()
    })
}

fn signatory() -> StepInput {
    StepInput::Signatory(SignatoryInput {
        full_name: "Awa Kouassi".into(),
        email: "awa@kouassi-trading.ci".into(),
        calling_code: "+225".into(),
        mobile_number: "0102030405".into(),
    })
}

#[tokio::test]
async fn full_activation_flow_survives_a_restart() {
    let temp_dir = TempDir::new().unwrap();
    let subject = SubjectId::new("merchant-1");
    let backend = Arc::new(ScriptedBackend::new(ActivationStatus::NotSubmitted));

    {
        let store = Arc::new(FileWizardStateRepository::with_defaults(
            temp_dir.path().to_path_buf(),
        ));
        let wizard = ActivationWizard::new(store, backend.clone(), Arc::new(SilentNotifier));

        wizard.restore().await.unwrap();
        wizard.sync_status(&subject).await.unwrap();

        wizard.advance(StepInput::AccountCreated).await.unwrap();
        wizard.advance(business_details()).await.unwrap();
        let snapshot = wizard.advance(signatory()).await.unwrap();
        assert_eq!(snapshot.step, WizardStep::Documents);

        wizard
            .record_upload(DocumentKind::IdentityProof, Ok(FileRef::new("ref-id")))
            .await
            .unwrap();
        wizard
            .record_upload(DocumentKind::AddressProof, Ok(FileRef::new("ref-addr")))
            .await
            .unwrap();
        wizard
            .record_upload(
                DocumentKind::BusinessRegistration,
                Ok(FileRef::new("ref-reg")),
            )
            .await
            .unwrap();

        let snapshot = wizard
            .submit(&subject, Confirmation::Confirmed)
            .await
            .unwrap();
        assert_eq!(snapshot.step, WizardStep::Verification);
        assert_eq!(backend.submit_calls.load(Ordering::SeqCst), 1);
    }

    // A fresh controller over the same slot resumes where the user left off.
    let store = Arc::new(FileWizardStateRepository::with_defaults(
        temp_dir.path().to_path_buf(),
    ));
    let wizard = ActivationWizard::new(store, backend.clone(), Arc::new(SilentNotifier));

    let snapshot = wizard.restore().await.unwrap();
    assert_eq!(snapshot.step, WizardStep::Verification);
    assert_eq!(snapshot.data.legal_name, "Kouassi Trading SARL");
    assert_eq!(snapshot.data.identity_proof, "ref-id");

    // Approval reported by the oracle forces the terminal step.
    backend.set_status(ActivationStatus::Approved);
    let snapshot = wizard.sync_status(&subject).await.unwrap();
    assert_eq!(snapshot.step, WizardStep::Activated);
}

#[tokio::test]
async fn not_authorized_clears_the_persisted_slot() {
    let temp_dir = TempDir::new().unwrap();
    let subject = SubjectId::new("merchant-2");
    let backend = Arc::new(ScriptedBackend::new(ActivationStatus::NotAuthorized));
    let store = Arc::new(FileWizardStateRepository::with_defaults(
        temp_dir.path().to_path_buf(),
    ));

    let wizard = ActivationWizard::new(store.clone(), backend, Arc::new(SilentNotifier));
    wizard.restore().await.unwrap();
    wizard.advance(StepInput::AccountCreated).await.unwrap();
    wizard.advance(business_details()).await.unwrap();

    let snapshot = wizard.sync_status(&subject).await.unwrap();

    assert_eq!(snapshot.step, WizardStep::CreateAccount);
    assert!(snapshot.data.is_empty());
    assert!(store.load().await.unwrap().is_none());
}
