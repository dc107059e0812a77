//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the editor host:
//! - Signature decoration
//! - Signature folding
//! - Edit debouncing

pub mod debounce;
pub mod folding;
pub mod visibility;

use crate::app::domain::Document;

/// `document` if it is in the language whose signatures we handle.
pub(crate) fn target_document(document: Option<&Document>) -> Option<&Document> {
    match document {
        None => {
            tracing::trace!("no active document");
            None
        }
        Some(doc) if !doc.is_target_language() => {
            tracing::trace!(language = %doc.language_id, "skipping non-target document");
            None
        }
        Some(doc) => Some(doc),
    }
}
