//! Flattened activation request.
//!
//! The assembled draft is translated into the fixed parameter set the
//! backend activation call expects. The signatory phone number is the
//! literal concatenation of the calling code and the local number.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::activation::data::ActivationData;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationRequest {
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

    pub signatory_name: String,
    pub signatory_email: String,
    /// Calling code + local number, concatenated without separators.
    pub signatory_phone: String,

    pub identity_proof: String,
    pub address_proof: String,
    pub business_registration: String,

    pub submitted_at: DateTime<Utc>,
}

impl ActivationRequest {
    pub fn from_data(data: &ActivationData) -> Self {
        ActivationRequest {
            legal_name: data.legal_name.clone(),
            tax_number: data.tax_number.clone(),
            description: data.description.clone(),
            country: data.country.clone(),
            region: data.region.clone(),
            city: data.city.clone(),
            postal_code: data.postal_code.clone(),
            street: data.street.clone(),
            proof_of_business: data.proof_of_business.clone(),
            business_url: data.business_url.clone(),
            signatory_name: data.full_name.clone(),
            signatory_email: data.email.clone(),
            signatory_phone: format!("{}{}", data.calling_code, data.mobile_number),
            identity_proof: data.identity_proof.clone(),
            address_proof: data.address_proof.clone(),
            business_registration: data.business_registration.clone(),
            submitted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_is_the_literal_concatenation() {
        let mut data = ActivationData::default();
        data.calling_code = "+225".into();
        data.mobile_number = "0102030405".into();

        let request = ActivationRequest::from_data(&data);
        assert_eq!(request.signatory_phone, "+2250102030405");
    }
}
