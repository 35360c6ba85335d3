//! Wizard state port.
//!
//! Contract for the persisted wizard slot: current step plus accumulated
//! draft. Survives restarts; there is no server-side mirror.

use async_trait::async_trait;

use crate::activation::WizardState;

#[async_trait]
pub trait WizardStatePort: Send + Sync {
    /// Load the persisted state, or `None` if the slot is empty.
    async fn load(&self) -> anyhow::Result<Option<WizardState>>;

    /// Write the state to the slot.
    async fn save(&self, state: &WizardState) -> anyhow::Result<()>;

    /// Remove the slot entirely.
    async fn clear(&self) -> anyhow::Result<()>;
}
