//! File-based wizard state repository
//!
//! This module provides a file-based implementation of the WizardStatePort,
//! persisting the current step index and the activation draft to a local
//! JSON file so the wizard survives restarts. There is no server-side
//! mirror of this slot.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use mp_core::activation::{ActivationData, WizardState, WizardStep};
use mp_core::ports::WizardStatePort;

pub const DEFAULT_WIZARD_STATE_FILE: &str = ".wizard_state";

/// Persisted record: the step index and the draft aggregate.
#[derive(Debug, Serialize, Deserialize)]
struct WizardStateRecord {
    current_step: u8,
    data: ActivationData,
}

pub struct FileWizardStateRepository {
    state_file_path: PathBuf,
}

impl FileWizardStateRepository {
    /// Create repository with custom file path
    pub fn new(state_file_path: PathBuf) -> Self {
        Self { state_file_path }
    }

    /// Create repository with base dir and filename
    pub fn with_base_dir(base_dir: PathBuf, filename: impl Into<String>) -> Self {
        Self {
            state_file_path: base_dir.join(filename.into()),
        }
    }

    /// Create repository with defaults
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            state_file_path: base_dir.join(DEFAULT_WIZARD_STATE_FILE),
        }
    }

    async fn ensure_parent_dir(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.state_file_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl WizardStatePort for FileWizardStateRepository {
    async fn load(&self) -> anyhow::Result<Option<WizardState>> {
        if !self.state_file_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.state_file_path).await?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let record: WizardStateRecord = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse wizard state: {e}"))?;

        let step = WizardStep::from_index(record.current_step).ok_or_else(|| {
            anyhow::anyhow!("wizard state holds unknown step index {}", record.current_step)
        })?;

        Ok(Some(WizardState::new(step, record.data)))
    }

    async fn save(&self, state: &WizardState) -> anyhow::Result<()> {
        self.ensure_parent_dir().await?;

        let record = WizardStateRecord {
            current_step: state.step.index(),
            data: state.data.clone(),
        };
        let json = serde_json::to_string_pretty(&record)
            .map_err(|e| anyhow::anyhow!("Failed to serialize wizard state: {e}"))?;

        let mut file = fs::File::create(&self.state_file_path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create state file: {e}"))?;

        file.write_all(json.as_bytes())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to write state file: {e}"))?;

        file.sync_all()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to sync state file: {e}"))?;

        Ok(())
    }

    async fn clear(&self) -> anyhow::Result<()> {
        if self.state_file_path.exists() {
            fs::remove_file(&self.state_file_path).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn draft() -> WizardState {
        let mut data = ActivationData::default();
        data.legal_name = "Kouassi Trading SARL".into();
        data.identity_proof = "ref-id".into();
        WizardState::new(WizardStep::Documents, data)
    }

    #[tokio::test]
    async fn load_returns_none_when_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileWizardStateRepository::new(temp_dir.path().join("missing.json"));

        assert!(repo.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_then_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileWizardStateRepository::new(temp_dir.path().join("state.json"));

        repo.save(&draft()).await.unwrap();
        let loaded = repo.load().await.unwrap().unwrap();

        assert_eq!(loaded, draft());
    }

    #[tokio::test]
    async fn clear_removes_the_slot() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileWizardStateRepository::new(temp_dir.path().join("state.json"));

        repo.save(&draft()).await.unwrap();
        repo.clear().await.unwrap();

        assert!(repo.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn clear_on_an_empty_slot_is_fine() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileWizardStateRepository::new(temp_dir.path().join("state.json"));

        repo.clear().await.unwrap();
    }

    #[tokio::test]
    async fn empty_file_loads_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let state_file = temp_dir.path().join("empty.json");

        fs::write(&state_file, "").await.unwrap();

        let repo = FileWizardStateRepository::new(state_file);
        assert!(repo.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn invalid_json_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let state_file = temp_dir.path().join("invalid.json");

        fs::write(&state_file, "{invalid json").await.unwrap();

        let repo = FileWizardStateRepository::new(state_file);
        let result = repo.load().await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to parse"));
    }

    #[tokio::test]
    async fn unknown_step_index_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let state_file = temp_dir.path().join("stale.json");

        let record = serde_json::json!({
            "current_step": 9,
            "data": ActivationData::default(),
        });
        fs::write(&state_file, record.to_string()).await.unwrap();

        let repo = FileWizardStateRepository::new(state_file);
        let result = repo.load().await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("unknown step index"));
    }

    #[tokio::test]
    async fn with_defaults_uses_expected_path() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileWizardStateRepository::with_defaults(temp_dir.path().to_path_buf());

        let expected_path = temp_dir.path().join(DEFAULT_WIZARD_STATE_FILE);
        assert_eq!(repo.state_file_path, expected_path);
    }
}
