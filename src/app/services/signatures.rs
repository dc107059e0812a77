//! Line-oriented matching of Sorbet `sig` annotations.
//!
//! This is deliberately not a Ruby parser. Both patterns run in multi-line,
//! dot-matches-newline mode over the raw text, so a `sig do` or `end` inside a
//! string literal or heredoc is picked up as a boundary. Block and inline
//! matches are produced independently and may overlap.
//!
//! Indentation is matched as spaces and tabs only, so a region always starts
//! on its `sig` line and ends on its closing line. `$` stops before `\r\n`.

use std::ops::Range as ByteRange;
use std::sync::OnceLock;

use regex_lite::Regex;

use super::positions::LineIndex;
use crate::app::domain::Range;

/// `sig do` on its own line, up to the nearest following `end` line.
const BLOCK_PATTERN: &str = r"(?msR)^[ \t]*sig do[ \t]*$.*?^[ \t]*end[ \t]*$";

/// `sig { ... }` closing at the end of a line.
const INLINE_PATTERN: &str = r"(?msR)^[ \t]*sig \{.*?\}[ \t]*?$";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureKind {
    Block,
    Inline,
}

impl SignatureKind {
    pub fn all() -> &'static [SignatureKind] {
        &[Self::Block, Self::Inline]
    }

    /// Compiled pattern for this kind, built once per process.
    pub fn pattern(&self) -> &'static Regex {
        static BLOCK: OnceLock<Regex> = OnceLock::new();
        static INLINE: OnceLock<Regex> = OnceLock::new();

        match self {
            Self::Block => BLOCK.get_or_init(|| Regex::new(BLOCK_PATTERN).expect("Invalid block sig regex")),
            Self::Inline => INLINE.get_or_init(|| Regex::new(INLINE_PATTERN).expect("Invalid inline sig regex")),
        }
    }
}

/// A matched signature, as a byte range into the text it was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureRegion {
    pub kind: SignatureKind,
    pub start: usize,
    pub end: usize,
}

impl SignatureRegion {
    pub fn span(&self) -> ByteRange<usize> {
        self.start..self.end
    }
}

/// Every non-overlapping match of `pattern`, scanning left to right.
pub fn find_regions(text: &str, pattern: &Regex) -> Vec<(usize, usize)> {
    pattern.find_iter(text).map(|m| (m.start(), m.end())).collect()
}

/// Regions of a single kind.
pub fn signature_regions(text: &str, kind: SignatureKind) -> Vec<SignatureRegion> {
    find_regions(text, kind.pattern())
        .into_iter()
        .map(|(start, end)| SignatureRegion { kind, start, end })
        .collect()
}

/// Block regions followed by inline regions, mapped to host ranges.
pub fn signature_ranges(text: &str) -> Vec<Range> {
    let index = LineIndex::new(text);
    SignatureKind::all()
        .iter()
        .flat_map(|&kind| signature_regions(text, kind))
        .map(|region| index.range(region.start, region.end))
        .collect()
}
