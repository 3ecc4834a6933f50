use std::{collections::HashMap, time::Duration};

use serde::Deserialize;
use serde_json::Value;

pub const MIN_REQUEST_TIMEOUT_MS: u64 = 50;
pub const MAX_REQUEST_TIMEOUT_MS: u64 = 120_000;
const DEFAULT_LANGUAGE_ID: &str = "ada";

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceSettings {
    /// Upper bound on one definition round trip.
    pub request_timeout_ms: u64,
    /// `languageId` announced when opening documents.
    pub language_id: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            request_timeout_ms: 5_000,
            language_id: DEFAULT_LANGUAGE_ID.to_string(),
        }
    }
}

impl ServiceSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub(crate) fn apply_patch(
        &mut self,
        patch: ServiceSettingsPatch,
    ) {
        if let Some(v) = patch.request_timeout_ms {
            self.request_timeout_ms = v;
        }
        if let Some(v) = patch.language_id {
            self.language_id = v;
        }
    }

    pub(crate) fn normalize(&mut self) {
        self.request_timeout_ms = self.request_timeout_ms.clamp(MIN_REQUEST_TIMEOUT_MS, MAX_REQUEST_TIMEOUT_MS);
        self.language_id = self.language_id.trim().to_string();
        if self.language_id.is_empty() {
            self.language_id = DEFAULT_LANGUAGE_ID.to_string();
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct ServiceSettingsPatch {
    pub(crate) request_timeout_ms: Option<u64>,
    pub(crate) language_id: Option<String>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, Value>,
}
