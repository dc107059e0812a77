//! Services layer - pure text operations.
//!
//! Nothing here talks to the host:
//! - Signature region matching
//! - Byte offset to line/column mapping

pub mod positions;
pub mod signatures;

pub use positions::{LineIndex, offset_to_position};
pub use signatures::{SignatureKind, SignatureRegion, find_regions, signature_ranges, signature_regions};
