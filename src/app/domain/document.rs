/// Language identifier of documents whose signatures are hidden.
pub const TARGET_LANGUAGE: &str = "ruby";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(pub u64);

/// A line/column pair as the host editor understands it.
///
/// Both fields are zero-based. `character` counts UTF-16 code units from the
/// start of the line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub const fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// Half-open span between two positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// True if `line` falls within `start.line..=end.line`.
    pub fn contains_line(&self, line: u32) -> bool {
        self.start.line <= line && line <= self.end.line
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    pub anchor: Position,
    pub active: Position,
}

impl Selection {
    pub const fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// Zero-width selection at `pos`.
    pub const fn caret(pos: Position) -> Self {
        Self { anchor: pos, active: pos }
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }
}

/// Snapshot of the host's active document.
///
/// Taken once per handler invocation and never cached across events.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub language_id: String,
    pub text: String,
    pub selections: Vec<Selection>,
}

impl Document {
    pub fn new(id: DocumentId, language_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            language_id: language_id.into(),
            text: text.into(),
            selections: vec![Selection::default()],
        }
    }

    pub fn with_selections(mut self, selections: Vec<Selection>) -> Self {
        self.selections = selections;
        self
    }

    pub fn is_target_language(&self) -> bool {
        self.language_id == TARGET_LANGUAGE
    }

    /// The primary selection. A document reporting none has its caret at the origin.
    pub fn primary_selection(&self) -> Selection {
        self.selections.first().copied().unwrap_or_default()
    }

    /// Line of the primary cursor.
    pub fn cursor_line(&self) -> u32 {
        self.primary_selection().active.line
    }
}
