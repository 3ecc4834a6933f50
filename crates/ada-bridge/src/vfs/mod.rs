mod registry;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tower_lsp::lsp_types::Url;

pub use registry::{DocumentRegistry, Vfs};

/// Stable identity of a source file: its normalized path, or the raw URL
/// for URLs that are not `file:` URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FileId(String);

impl FileId {
    pub fn from_path(path: &Path) -> Self {
        Self(normalized_path(path).display().to_string())
    }

    pub fn from_url(url: &Url) -> Self {
        if let Ok(path) = url.to_file_path() {
            return Self::from_path(&path);
        }
        Self(url.as_str().to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    pub fn to_url(&self) -> Option<Url> {
        Url::from_file_path(self.as_path()).or_else(|_| Url::parse(&self.0)).ok()
    }
}

impl std::fmt::Display for FileId {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn normalized_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
