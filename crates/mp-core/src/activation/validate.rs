//! Per-step validation schemas.
//!
//! Each wizard step has an independent schema. A step's output is only ever
//! merged into the draft aggregate after its schema passes, so no step can
//! silently advance with invalid data. Errors are step-local field errors.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::activation::data::DocumentKind;

/// Minimum length of the business description.
pub const MIN_DESCRIPTION_LEN: u64 = 40;

/// `+` followed by digits.
static CALLING_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+[0-9]{1,4}$").unwrap());

/// Accepted shapes for the combined calling code + local number. The local
/// part tolerates common grouping separators but the overall digit count is
/// fixed per shape.
static PHONE_SHAPES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // Plain international form: +2250102030405
        Regex::new(r"^\+[0-9]{1,4}[0-9]{7,12}$").unwrap(),
        // Grouped local part: +225 01 02 03 04 05, +44 (020) 1234-5678
        Regex::new(r"^\+[0-9]{1,4}([ .-]?\(?[0-9]{2,4}\)?){3,6}$").unwrap(),
    ]
});

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

fn derive_errors(result: Result<(), ValidationErrors>) -> ValidationErrors {
    match result {
        Ok(()) => ValidationErrors::new(),
        Err(errors) => errors,
    }
}

fn finish(errors: ValidationErrors) -> Result<(), ValidationErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Output of the business-details step.
///
/// Tax number and business URL are optional; every other field is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct BusinessDetailsInput {
    #[validate(length(min = 1, message = "legal name is required"))]
    pub legal_name: String,
    /// Optional; empty means "not provided".
    pub tax_number: String,
    #[validate(length(min = 40, message = "description must be at least 40 characters"))]
    pub description: String,
    #[validate(length(min = 1, message = "country is required"))]
    pub country: String,
    #[validate(length(min = 1, message = "region is required"))]
    pub region: String,
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "postal code is required"))]
    pub postal_code: String,
    #[validate(length(min = 1, message = "street is required"))]
    pub street: String,
    #[validate(length(min = 1, message = "proof-of-business category is required"))]
    pub proof_of_business: String,
    /// Optional; if non-empty it must parse as a URL.
    pub business_url: String,
}

impl BusinessDetailsInput {
    pub fn validate_step(&self) -> Result<(), ValidationErrors> {
        let mut errors = derive_errors(self.validate());
        if !self.business_url.is_empty() && Url::parse(&self.business_url).is_err() {
            errors.add(
                "business_url",
                field_error("url", "business URL must be a well-formed URL"),
            );
        }
        finish(errors)
    }
}

/// Output of the signatory step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SignatoryInput {
    #[validate(length(min = 1, message = "full name is required"))]
    pub full_name: String,
    #[validate(email(message = "email address is not valid"))]
    pub email: String,
    /// Country calling code, `+` followed by digits.
    pub calling_code: String,
    /// Local mobile number; checked in combination with the calling code.
    pub mobile_number: String,
}

impl SignatoryInput {
    /// The full phone number as submitted to the backend.
    pub fn full_phone_number(&self) -> String {
        format!("{}{}", self.calling_code, self.mobile_number)
    }

    pub fn validate_step(&self) -> Result<(), ValidationErrors> {
        let mut errors = derive_errors(self.validate());
        if !CALLING_CODE_RE.is_match(&self.calling_code) {
            errors.add(
                "calling_code",
                field_error("calling_code", "calling code must be `+` followed by digits"),
            );
        } else {
            let combined = self.full_phone_number();
            if !PHONE_SHAPES.iter().any(|shape| shape.is_match(&combined)) {
                errors.add(
                    "mobile_number",
                    field_error("phone_shape", "phone number does not match an accepted shape"),
                );
            }
        }
        finish(errors)
    }
}

/// Output of the documents step: one stored-file reference per slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentsInput {
    pub identity_proof: String,
    pub address_proof: String,
    pub business_registration: String,
}

impl DocumentsInput {
    fn slot(&self, kind: DocumentKind) -> &str {
        match kind {
            DocumentKind::IdentityProof => &self.identity_proof,
            DocumentKind::AddressProof => &self.address_proof,
            DocumentKind::BusinessRegistration => &self.business_registration,
        }
    }

    pub fn validate_step(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for kind in DocumentKind::ALL {
            if self.slot(kind).is_empty() {
                errors.add(
                    kind.field_name(),
                    field_error("required", "document has not been uploaded"),
                );
            }
        }
        finish(errors)
    }
}
