//! Runtime settings.
//!
//! Settings are split into one file per category. [`BridgeSettings`]
//! aggregates all categories and handles deserialization from LSP-style
//! JSON payloads and from an `ada-bridge.toml` file.

pub(crate) mod logging;
pub(crate) mod service;
pub(crate) mod workspace;

use std::{collections::HashMap, path::Path};

pub use logging::{LogLevel, LoggingSettings};
use logging::LoggingSettingsPatch;
use serde::Deserialize;
use serde_json::Value;
pub use service::{MAX_REQUEST_TIMEOUT_MS, MIN_REQUEST_TIMEOUT_MS, ServiceSettings};
use service::ServiceSettingsPatch;
pub use workspace::WorkspaceSettings;
use workspace::WorkspaceSettingsPatch;

use crate::error::ConfigError;

pub const SETTINGS_SECTION_KEY: &str = "ada-bridge";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BridgeSettings {
    pub service: ServiceSettings,
    pub workspace: WorkspaceSettings,
    pub logging: LoggingSettings,
}

impl BridgeSettings {
    pub fn from_lsp_payload(payload: Option<&Value>) -> Self {
        let mut settings = Self::default();
        if let Some(payload) = payload {
            settings = settings.merged_with_payload(payload);
        }
        settings
    }

    /// Read a TOML file with the same shape as the JSON payload.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let payload: Value = toml::from_str(&text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_lsp_payload(Some(&payload)))
    }

    pub fn merged_with_payload(
        &self,
        payload: &Value,
    ) -> Self {
        let mut merged = self.clone();

        for candidate in payload_candidates(payload) {
            if let Ok(patch) = serde_json::from_value::<BridgeSettingsPatch>(candidate.clone()) {
                merged.apply_patch(patch);
            }
        }

        merged.normalize();
        merged
    }

    fn apply_patch(
        &mut self,
        patch: BridgeSettingsPatch,
    ) {
        if let Some(p) = patch.service {
            self.service.apply_patch(p);
        }
        if let Some(p) = patch.workspace {
            self.workspace.apply_patch(p);
        }
        if let Some(p) = patch.logging {
            self.logging.apply_patch(p);
        }
    }

    fn normalize(&mut self) {
        self.service.normalize();
        self.workspace.normalize();
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct BridgeSettingsPatch {
    service: Option<ServiceSettingsPatch>,
    workspace: Option<WorkspaceSettingsPatch>,
    logging: Option<LoggingSettingsPatch>,
    #[serde(flatten)]
    _extra: HashMap<String, Value>,
}

fn payload_candidates(payload: &Value) -> Vec<&Value> {
    let mut candidates = vec![payload];
    if let Some(scoped) = payload.get(SETTINGS_SECTION_KEY) {
        candidates.push(scoped);
    }
    candidates
}

#[cfg(test)]
#[path = "../../tests/src/config/settings_tests.rs"]
mod tests;
