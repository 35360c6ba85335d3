//! Activation draft aggregate.
//!
//! The aggregate is a flat record accumulated across wizard steps. Each step
//! produces a typed output which is shallow-merged into the aggregate: a step
//! overwrites exactly the fields it owns and never touches another step's.

use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

use crate::activation::validate::{BusinessDetailsInput, DocumentsInput, SignatoryInput};

/// KYC document slots collected by the documents step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    IdentityProof,
    AddressProof,
    BusinessRegistration,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::IdentityProof,
        DocumentKind::AddressProof,
        DocumentKind::BusinessRegistration,
    ];

    /// Field name of the matching aggregate slot.
    pub fn field_name(self) -> &'static str {
        match self {
            DocumentKind::IdentityProof => "identity_proof",
            DocumentKind::AddressProof => "address_proof",
            DocumentKind::BusinessRegistration => "business_registration",
        }
    }
}

/// The accumulated activation draft. Empty strings mean "not provided yet".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationData {
    // Business identity
    pub legal_name: String,
    pub tax_number: String,
    pub description: String,
    pub country: String,
    pub region: String,
    pub city: String,
    pub postal_code: String,
    pub street: String,
    pub proof_of_business: String,
    pub business_url: String,

    // Authorized signatory
    pub full_name: String,
    pub email: String,
    pub calling_code: String,
    pub mobile_number: String,

    // Document references
    pub identity_proof: String,
    pub address_proof: String,
    pub business_registration: String,
}

impl ActivationData {
    /// True when nothing has been collected yet.
    pub fn is_empty(&self) -> bool {
        *self == ActivationData::default()
    }

    /// Shallow-merge one step's output into the aggregate.
    pub fn apply(&mut self, input: &StepInput) {
        match input {
            StepInput::AccountCreated => {}
            StepInput::BusinessDetails(details) => {
                self.legal_name = details.legal_name.clone();
                self.tax_number = details.tax_number.clone();
                self.description = details.description.clone();
                self.country = details.country.clone();
                self.region = details.region.clone();
                self.city = details.city.clone();
                self.postal_code = details.postal_code.clone();
                self.street = details.street.clone();
                self.proof_of_business = details.proof_of_business.clone();
                self.business_url = details.business_url.clone();
            }
            StepInput::Signatory(signatory) => {
                self.full_name = signatory.full_name.clone();
                self.email = signatory.email.clone();
                self.calling_code = signatory.calling_code.clone();
                self.mobile_number = signatory.mobile_number.clone();
            }
            StepInput::Documents(documents) => {
                self.identity_proof = documents.identity_proof.clone();
                self.address_proof = documents.address_proof.clone();
                self.business_registration = documents.business_registration.clone();
            }
        }
    }

    pub fn document_reference(&self, kind: DocumentKind) -> &str {
        match kind {
            DocumentKind::IdentityProof => &self.identity_proof,
            DocumentKind::AddressProof => &self.address_proof,
            DocumentKind::BusinessRegistration => &self.business_registration,
        }
    }

    pub fn set_document_reference(&mut self, kind: DocumentKind, reference: String) {
        match kind {
            DocumentKind::IdentityProof => self.identity_proof = reference,
            DocumentKind::AddressProof => self.address_proof = reference,
            DocumentKind::BusinessRegistration => self.business_registration = reference,
        }
    }

    /// Document slots still waiting for an upload, in declaration order.
    pub fn missing_documents(&self) -> Vec<DocumentKind> {
        DocumentKind::ALL
            .into_iter()
            .filter(|kind| self.document_reference(*kind).is_empty())
            .collect()
    }
}

/// One wizard step's validated output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum StepInput {
    /// The account step contributes no draft data.
    AccountCreated,
    BusinessDetails(BusinessDetailsInput),
    Signatory(SignatoryInput),
    Documents(DocumentsInput),
}

impl StepInput {
    /// Run the step's schema. A step input is only merged after this passes.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            StepInput::AccountCreated => Ok(()),
            StepInput::BusinessDetails(input) => input.validate_step(),
            StepInput::Signatory(input) => input.validate_step(),
            StepInput::Documents(input) => input.validate_step(),
        }
    }
}
