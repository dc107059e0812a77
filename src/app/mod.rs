//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Document, positions, settings, messages)
//! - `controllers/` - Orchestration (visibility, folding, debounce)
//! - `services/` - Pure text operations (signature matching, position mapping)
//! - `infrastructure/` - External integrations (editor host, settings file, error)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for convenient external access
pub use domain::{
    Command, DecorationOptions, Document, DocumentId, Message, Position, Range, Selection,
    SigSettings,
};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::host::{EditorHost, EventSink, HostCommand, HostEvent, StyleToken, Subscription};
pub use state::AppState;
