use tower_lsp::lsp_types::*;

use crate::text_pos::LineIndex;

// ── Document ────────────────────────────────────────────────────────────────

/// Snapshot of a single text document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// The document URI, as sent to the analysis service.
    pub uri: Url,
    /// Full source text.
    pub text: String,
    /// Document version as reported by the editor (0 for files read from disk).
    pub version: i32,
    /// Line starts, rebuilt on every mutation.
    line_index: LineIndex,
}

impl Document {
    pub fn new(
        uri: Url,
        text: String,
        version: i32,
    ) -> Self {
        let line_index = LineIndex::new(&text);
        Self {
            uri,
            text,
            version,
            line_index,
        }
    }

    // ── queries ─────────────────────────────────────────────────────────

    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// Number of lines in the document.
    pub fn line_count(&self) -> usize {
        self.line_index.line_count()
    }

    /// Return the full text of a given 0-based line (without the trailing newline).
    pub fn line_text(
        &self,
        line: usize,
    ) -> Option<&str> {
        let range = self.line_index.line_range(&self.text, line)?;
        Some(&self.text[range])
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    // ── mutations ───────────────────────────────────────────────────────

    /// Replace the full content and bump version.
    pub fn set_content(
        &mut self,
        text: String,
        version: i32,
    ) {
        self.text = text;
        self.version = version;
        self.line_index = LineIndex::new(&self.text);
    }

    /// Apply a list of incremental or full-content changes and bump version.
    ///
    /// Changes whose range does not map into the current text are skipped.
    pub fn apply_changes(
        &mut self,
        changes: Vec<TextDocumentContentChangeEvent>,
        version: i32,
    ) {
        for change in changes {
            if let Some(range) = change.range {
                let start = self.line_index.offset_of(&self.text, range.start);
                let end = self.line_index.offset_of(&self.text, range.end);
                if let (Some(start), Some(end)) = (start, end)
                    && start <= end
                {
                    self.text.replace_range(start..end, &change.text);
                    self.line_index = LineIndex::new(&self.text);
                }
            } else {
                self.text = change.text;
                self.line_index = LineIndex::new(&self.text);
            }
        }
        self.version = version;
    }
}

#[cfg(test)]
#[path = "../../tests/src/document/text_document_tests.rs"]
mod tests;
