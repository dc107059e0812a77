use crate::app::domain::{Position, Range};

/// Line start table for one text snapshot.
///
/// Maps byte offsets (what the regex engine reports) to host positions:
/// zero-based lines split on `\n`, columns in UTF-16 code units.
pub struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self { text, line_starts }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Position of `offset`.
    ///
    /// Offsets past the end clamp to the end of the text. An offset inside a
    /// multi-byte character resolves to the start of that character.
    pub fn position(&self, offset: usize) -> Position {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }

        // line_starts[0] == 0, so partition_point is always >= 1
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_starts[line];
        let character = self.text[line_start..offset].encode_utf16().count();

        Position::new(line as u32, character as u32)
    }

    pub fn range(&self, start: usize, end: usize) -> Range {
        Range::new(self.position(start), self.position(end))
    }
}

/// Convert a byte offset in `text` to a line/column position.
pub fn offset_to_position(text: &str, offset: usize) -> Position {
    LineIndex::new(text).position(offset)
}
