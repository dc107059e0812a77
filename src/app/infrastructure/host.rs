//! The editor host seam.
//!
//! [`EditorHost`] is everything this crate needs from an editor: the active
//! document, a decoration primitive, fold commands, change notifications and a
//! configuration store. Production hosts wrap a real editor; tests use the
//! recording host in `app::testing`.

use std::fmt;

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;

use super::error::Result;
use crate::app::domain::settings::CONFIG_NAMESPACE;
use crate::app::domain::{Command, DecorationOptions, Document, Message, Range, Selection, SigSettings};

/// Handle to one decoration style created by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleToken(pub u64);

/// Built-in editor commands driven by the fold controller.
///
/// Both act on the document's current selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostCommand {
    Fold,
    UnfoldAll,
}

impl HostCommand {
    pub fn id(&self) -> &'static str {
        match self {
            Self::Fold => "editor.fold",
            Self::UnfoldAll => "editor.unfoldAll",
        }
    }
}

/// Host notifications the coordinator subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostEvent {
    ActiveEditorChanged,
    DocumentChanged,
}

impl HostEvent {
    pub fn all() -> &'static [HostEvent] {
        &[Self::ActiveEditorChanged, Self::DocumentChanged]
    }

    pub fn message(&self) -> Message {
        match self {
            Self::ActiveEditorChanged => Message::ActiveEditorChanged,
            Self::DocumentChanged => Message::DocumentChanged,
        }
    }
}

/// Posts one fixed message into the coordinator channel.
///
/// Handed to the host on subscription; the host calls [`EventSink::emit`]
/// each time the event fires or the command is invoked.
#[derive(Clone)]
pub struct EventSink {
    message: Message,
    sender: UnboundedSender<Message>,
}

impl EventSink {
    pub fn new(message: Message, sender: UnboundedSender<Message>) -> Self {
        Self { message, sender }
    }

    pub fn message(&self) -> Message {
        self.message
    }

    /// Returns false once the coordinator has gone away.
    pub fn emit(&self) -> bool {
        self.sender.send(self.message).is_ok()
    }
}

impl fmt::Debug for EventSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventSink")
            .field("message", &self.message)
            .field("closed", &self.sender.is_closed())
            .finish()
    }
}

/// Registration returned by the host. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release.
    pub fn empty() -> Self {
        Self { release: None }
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Editor capabilities used by the controllers.
///
/// Hosts are single-threaded; all methods are called from the coordinator's
/// task, so implementations use interior mutability rather than locks.
#[async_trait(?Send)]
pub trait EditorHost {
    /// Snapshot of the focused document, if any.
    fn active_document(&self) -> Option<Document>;

    /// Replace the active document's selections.
    fn set_selections(&self, selections: Vec<Selection>);

    /// Raw configuration section, `Null` if absent.
    fn configuration(&self, namespace: &str) -> serde_json::Value;

    /// Style parameters are fixed once the token is created.
    fn create_decoration_style(&self, options: &DecorationOptions) -> StyleToken;

    /// Also removes every decoration drawn with `token`.
    fn dispose_decoration_style(&self, token: StyleToken);

    /// Replace all decorations drawn with `token` in the active document.
    fn apply_decorations(&self, token: StyleToken, ranges: &[Range]) -> Result<()>;

    async fn execute_command(&self, command: HostCommand) -> Result<()>;

    fn subscribe(&self, event: HostEvent, sink: EventSink) -> Subscription;

    fn register_command(&self, command: Command, sink: EventSink) -> Subscription;

    /// Current settings, re-read on every call.
    fn settings(&self) -> SigSettings {
        SigSettings::from_section(self.configuration(CONFIG_NAMESPACE))
    }
}
