use std::{
    collections::{HashMap, HashSet},
    path::PathBuf,
};

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkspaceSettings {
    /// Directories definitions may point into. Empty means unrestricted.
    pub roots: Vec<String>,
}

impl WorkspaceSettings {
    pub fn root_paths(&self) -> Vec<PathBuf> {
        self.roots.iter().map(PathBuf::from).collect()
    }

    pub(crate) fn apply_patch(
        &mut self,
        patch: WorkspaceSettingsPatch,
    ) {
        if let Some(v) = patch.roots {
            self.roots = v;
        }
    }

    pub(crate) fn normalize(&mut self) {
        let mut seen = HashSet::new();
        self.roots = self
            .roots
            .iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .filter(|p| seen.insert(p.clone()))
            .collect();
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct WorkspaceSettingsPatch {
    pub(crate) roots: Option<Vec<String>>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, Value>,
}
