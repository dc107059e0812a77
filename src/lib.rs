//! Dims and folds Sorbet `sig` annotations in Ruby documents.
//!
//! The crate owns no editor. Everything it needs from one goes through
//! [`EditorHost`]; see [`AppState`] for the entry point.

pub mod app;

pub use app::{
    AppError, AppState, Command, DecorationOptions, Document, DocumentId, EditorHost, EventSink,
    HostCommand, HostEvent, Message, Position, Range, Result, Selection, SigSettings, StyleToken,
    Subscription,
};
