//! Wizard step enum.
//!
//! The step is a tagged union with an explicit index mapping instead of a
//! bare integer, so there is no way to land on an unnamed position.

use serde::{Deserialize, Serialize};

/// Position of the activation wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Account creation (handled by the auth layer, contributes no draft data).
    CreateAccount,
    /// Business identity details.
    BusinessDetails,
    /// Authorized signatory identity.
    Signatory,
    /// KYC document uploads and final submission.
    Documents,
    /// Awaiting backend verification.
    Verification,
    /// Terminal state: the merchant account is activated.
    Activated,
}

impl WizardStep {
    pub const FIRST: WizardStep = WizardStep::CreateAccount;
    pub const LAST: WizardStep = WizardStep::Activated;

    /// Stable numeric index used by the persisted slot.
    pub fn index(self) -> u8 {
        match self {
            WizardStep::CreateAccount => 0,
            WizardStep::BusinessDetails => 1,
            WizardStep::Signatory => 2,
            WizardStep::Documents => 3,
            WizardStep::Verification => 4,
            WizardStep::Activated => 5,
        }
    }

    pub fn from_index(index: u8) -> Option<WizardStep> {
        match index {
            0 => Some(WizardStep::CreateAccount),
            1 => Some(WizardStep::BusinessDetails),
            2 => Some(WizardStep::Signatory),
            3 => Some(WizardStep::Documents),
            4 => Some(WizardStep::Verification),
            5 => Some(WizardStep::Activated),
            _ => None,
        }
    }

    /// The following step, clamped at the terminal step.
    pub fn next(self) -> WizardStep {
        WizardStep::from_index(self.index() + 1).unwrap_or(WizardStep::LAST)
    }

    /// The preceding step, clamped at the first step.
    pub fn previous(self) -> WizardStep {
        match self.index().checked_sub(1) {
            Some(index) => WizardStep::from_index(index).unwrap_or(WizardStep::FIRST),
            None => WizardStep::FIRST,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == WizardStep::LAST
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        WizardStep::FIRST
    }
}

#[cfg(test)]
mod tests {
    use super::WizardStep;

    #[test]
    fn index_round_trips_for_every_step() {
        for index in 0..=5 {
            let step = WizardStep::from_index(index).unwrap();
            assert_eq!(step.index(), index);
        }
        assert_eq!(WizardStep::from_index(6), None);
    }

    #[test]
    fn next_clamps_at_terminal_step() {
        assert_eq!(WizardStep::Verification.next(), WizardStep::Activated);
        assert_eq!(WizardStep::Activated.next(), WizardStep::Activated);
    }

    #[test]
    fn previous_clamps_at_first_step() {
        assert_eq!(WizardStep::BusinessDetails.previous(), WizardStep::CreateAccount);
        assert_eq!(WizardStep::CreateAccount.previous(), WizardStep::CreateAccount);
    }
}
