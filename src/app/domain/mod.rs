//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Document snapshots, positions and selections
//! - Signature settings
//! - Message types for the event system

pub mod document;
pub mod messages;
pub mod settings;

pub use document::{Document, DocumentId, Position, Range, Selection};
pub use messages::{Command, Message};
pub use settings::{DecorationOptions, SigSettings};
