//! Conversion between byte offsets and LSP positions.
//!
//! Offsets count UTF-8 bytes from the start of the text, which is the unit
//! of the syntax tree. Positions follow the protocol: zero-based line, and
//! zero-based character counted in UTF-16 code units. Only `\n` ends a line.

use tower_lsp::lsp_types::Position;

use crate::document::Document;

/// Line start offsets of a text snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0usize];
        for (i, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self {
            line_starts,
        }
    }

    /// Number of lines. A text ending in `\n` has an empty last line.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte range of `line`, excluding its `\n` terminator.
    pub fn line_range(
        &self,
        text: &str,
        line: usize,
    ) -> Option<std::ops::Range<usize>> {
        let start = *self.line_starts.get(line)?;
        let end = match self.line_starts.get(line + 1) {
            Some(next) => next - 1,
            None => text.len(),
        };
        Some(start..end)
    }

    /// Position of a byte offset, `None` past the end or off a char boundary.
    pub fn position_of(
        &self,
        text: &str,
        offset: usize,
    ) -> Option<Position> {
        if offset > text.len() || !text.is_char_boundary(offset) {
            return None;
        }
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(ins) => ins.saturating_sub(1),
        };
        let line_start = self.line_starts[line];
        let character = utf16_len(&text[line_start..offset]);
        Some(Position::new(line as u32, character))
    }

    /// Byte offset of a position.
    ///
    /// The column may be one past the last character of the line, which
    /// addresses the terminator (or the end of the text on the last line).
    pub fn offset_of(
        &self,
        text: &str,
        position: Position,
    ) -> Option<usize> {
        let range = self.line_range(text, position.line as usize)?;
        let line_text = &text[range.clone()];

        let mut utf16_offset = 0u32;
        let mut byte_offset = range.start;
        for ch in line_text.chars() {
            if utf16_offset >= position.character {
                break;
            }
            utf16_offset += ch.len_utf16() as u32;
            byte_offset += ch.len_utf8();
        }

        // Either the column is past the line end or it splits a surrogate pair.
        if utf16_offset != position.character {
            return None;
        }
        Some(byte_offset)
    }
}

/// Protocol position of `offset` in `document`.
pub fn offset_to_position(
    document: &Document,
    offset: usize,
) -> Option<Position> {
    document.line_index().position_of(&document.text, offset)
}

/// Byte offset of `position` in `document`.
pub fn position_to_offset(
    document: &Document,
    position: Position,
) -> Option<usize> {
    document.line_index().offset_of(&document.text, position)
}

pub fn utf16_len(text: &str) -> u32 {
    text.chars().map(|c| c.len_utf16() as u32).sum()
}

#[cfg(test)]
#[path = "../tests/src/text_pos_tests.rs"]
mod tests;
