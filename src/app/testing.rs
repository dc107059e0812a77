//! Recording editor host for controller and coordinator tests.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::app::domain::{Command, DecorationOptions, Document, DocumentId, Range, Selection};
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::infrastructure::host::{
    EditorHost, EventSink, HostCommand, HostEvent, StyleToken, Subscription,
};

pub const SCENARIO: &str = "def f\n  sig do\n    params(x: Integer).void\n  end\n  def f(x); end\nend";

#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    CreateStyle(StyleToken, DecorationOptions),
    DisposeStyle(StyleToken),
    ApplyDecorations(StyleToken, Vec<Range>),
    SetSelections(Vec<Selection>),
    Execute(HostCommand),
}

enum Listener {
    Event(HostEvent),
    Command(Command),
}

#[derive(Default)]
struct HostState {
    document: Option<Document>,
    config: Value,
    next_token: u64,
    next_listener: u64,
    calls: Vec<HostCall>,
    listeners: Vec<(u64, Listener, EventSink)>,
    failing_command: Option<HostCommand>,
}

#[derive(Clone, Default)]
pub struct RecordingHost {
    state: Rc<RefCell<HostState>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: Document) -> Self {
        let host = Self::new();
        host.set_document(Some(document));
        host
    }

    /// Host with the scenario document open and the cursor at `cursor`.
    pub fn scenario(cursor: Selection) -> Self {
        let doc = Document::new(DocumentId(1), "ruby", SCENARIO).with_selections(vec![cursor]);
        let host = Self::with_document(doc);
        host.set_config(json!({ "byesig": { "enabled": true, "opacity": "0.3", "backgroundColor": "#888" } }));
        host
    }

    pub fn set_document(&self, document: Option<Document>) {
        self.state.borrow_mut().document = document;
    }

    pub fn document(&self) -> Option<Document> {
        self.state.borrow().document.clone()
    }

    /// Whole configuration tree, keyed by namespace.
    pub fn set_config(&self, config: Value) {
        self.state.borrow_mut().config = config;
    }

    pub fn fail_on(&self, command: HostCommand) {
        self.state.borrow_mut().failing_command = Some(command);
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.state.borrow().calls.clone()
    }

    pub fn take_calls(&self) -> Vec<HostCall> {
        std::mem::take(&mut self.state.borrow_mut().calls)
    }

    pub fn executed(&self) -> Vec<HostCommand> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                HostCall::Execute(command) => Some(command),
                _ => None,
            })
            .collect()
    }

    pub fn decorations_applied(&self) -> Vec<(StyleToken, Vec<Range>)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                HostCall::ApplyDecorations(token, ranges) => Some((token, ranges)),
                _ => None,
            })
            .collect()
    }

    /// Tokens created and not yet disposed.
    pub fn live_tokens(&self) -> Vec<StyleToken> {
        let mut live = Vec::new();
        for call in self.calls() {
            match call {
                HostCall::CreateStyle(token, _) => live.push(token),
                HostCall::DisposeStyle(token) => live.retain(|t| *t != token),
                _ => {}
            }
        }
        live
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    /// Fire a host event. Returns how many sinks accepted it.
    pub fn fire(&self, event: HostEvent) -> usize {
        let sinks: Vec<EventSink> = self
            .state
            .borrow()
            .listeners
            .iter()
            .filter(|(_, l, _)| matches!(l, Listener::Event(e) if *e == event))
            .map(|(_, _, sink)| sink.clone())
            .collect();
        sinks.iter().filter(|sink| sink.emit()).count()
    }

    /// Invoke a registered command the way a keybinding would.
    pub fn invoke(&self, command: Command) -> bool {
        let sink = self
            .state
            .borrow()
            .listeners
            .iter()
            .find(|(_, l, _)| matches!(l, Listener::Command(c) if *c == command))
            .map(|(_, _, sink)| sink.clone());
        sink.is_some_and(|sink| sink.emit())
    }

    fn listen(&self, listener: Listener, sink: EventSink) -> Subscription {
        let id = {
            let mut state = self.state.borrow_mut();
            state.next_listener += 1;
            let id = state.next_listener;
            state.listeners.push((id, listener, sink));
            id
        };
        let weak: Weak<RefCell<HostState>> = Rc::downgrade(&self.state);
        Subscription::new(move || {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().listeners.retain(|(i, _, _)| *i != id);
            }
        })
    }

    fn record(&self, call: HostCall) {
        self.state.borrow_mut().calls.push(call);
    }
}

#[async_trait(?Send)]
impl EditorHost for RecordingHost {
    fn active_document(&self) -> Option<Document> {
        self.document()
    }

    fn set_selections(&self, selections: Vec<Selection>) {
        if let Some(doc) = self.state.borrow_mut().document.as_mut() {
            doc.selections = selections.clone();
        }
        self.record(HostCall::SetSelections(selections));
    }

    fn configuration(&self, namespace: &str) -> Value {
        self.state.borrow().config.get(namespace).cloned().unwrap_or(Value::Null)
    }

    fn create_decoration_style(&self, options: &DecorationOptions) -> StyleToken {
        let token = {
            let mut state = self.state.borrow_mut();
            state.next_token += 1;
            StyleToken(state.next_token)
        };
        self.record(HostCall::CreateStyle(token, options.clone()));
        token
    }

    fn dispose_decoration_style(&self, token: StyleToken) {
        self.record(HostCall::DisposeStyle(token));
    }

    fn apply_decorations(&self, token: StyleToken, ranges: &[Range]) -> Result<()> {
        self.record(HostCall::ApplyDecorations(token, ranges.to_vec()));
        Ok(())
    }

    async fn execute_command(&self, command: HostCommand) -> Result<()> {
        self.record(HostCall::Execute(command));
        tokio::task::yield_now().await;
        if self.state.borrow().failing_command == Some(command) {
            return Err(AppError::host(format!("{} failed", command.id())));
        }
        Ok(())
    }

    fn subscribe(&self, event: HostEvent, sink: EventSink) -> Subscription {
        self.listen(Listener::Event(event), sink)
    }

    fn register_command(&self, command: Command, sink: EventSink) -> Subscription {
        self.listen(Listener::Command(command), sink)
    }
}
