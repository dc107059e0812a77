/// All messages that can be sent through the coordinator channel.
/// Host subscriptions, user commands and the debounce timer each send one of
/// these; the dispatch loop in `AppState::run` handles them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // Host events
    ActiveEditorChanged,
    DocumentChanged,

    // User commands
    Command(Command),

    // Timers
    DebounceElapsed,

    // Lifecycle
    Shutdown,
}

/// User-facing commands the host exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    HideSignatures,
    ShowSignatures,
}

impl Command {
    /// Identifier the host registers the command under.
    pub fn id(&self) -> &'static str {
        match self {
            Self::HideSignatures => "byesig.hideSig",
            Self::ShowSignatures => "byesig.showSig",
        }
    }

    /// Display title for menus and the command palette.
    pub fn title(&self) -> &'static str {
        match self {
            Self::HideSignatures => "Hide Signatures",
            Self::ShowSignatures => "Show Signatures",
        }
    }

    pub fn all() -> &'static [Command] {
        &[Self::HideSignatures, Self::ShowSignatures]
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.id() == id)
    }
}

impl From<Command> for Message {
    fn from(command: Command) -> Self {
        Message::Command(command)
    }
}
