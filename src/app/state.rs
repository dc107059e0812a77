use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use super::controllers::debounce::Debouncer;
use super::controllers::folding::apply_folding;
use super::controllers::target_document;
use super::controllers::visibility::VisibilityController;
use super::domain::{Command, Message};
use super::infrastructure::error::Result;
use super::infrastructure::host::{EditorHost, EventSink, HostCommand, HostEvent, Subscription};

/// Process-wide coordinator: one per activation.
///
/// Owns the decoration style, the pending debounce timer and every host
/// subscription. All three are released by [`deactivate`](Self::deactivate)
/// or on drop.
pub struct AppState<H: EditorHost> {
    host: H,
    sender: UnboundedSender<Message>,
    visibility: VisibilityController,
    debounce: Debouncer,
    subscriptions: Vec<Subscription>,
}

impl<H: EditorHost> AppState<H> {
    /// Subscribe to the host and hide signatures in the document already open, if any.
    ///
    /// Messages from the host arrive on the returned receiver; feed them to
    /// [`handle`](Self::handle) or hand both to [`run`](Self::run).
    pub async fn activate(host: H) -> Result<(Self, UnboundedReceiver<Message>)> {
        let (sender, receiver) = unbounded_channel();
        let mut state = Self {
            host,
            sender,
            visibility: VisibilityController::new(),
            debounce: Debouncer::default(),
            subscriptions: Vec::new(),
        };
        state.subscribe_all();

        if state.host.active_document().is_some() {
            state.hide_and_fold().await?;
        }

        tracing::info!("signature hider activated");
        Ok((state, receiver))
    }

    fn subscribe_all(&mut self) {
        for &event in HostEvent::all() {
            let sink = EventSink::new(event.message(), self.sender.clone());
            self.subscriptions.push(self.host.subscribe(event, sink));
        }
        for &command in Command::all() {
            let sink = EventSink::new(command.into(), self.sender.clone());
            self.subscriptions.push(self.host.register_command(command, sink));
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Sender for posting messages, e.g. [`Message::Shutdown`].
    pub fn sender(&self) -> UnboundedSender<Message> {
        self.sender.clone()
    }

    pub fn has_pending_hide(&self) -> bool {
        self.debounce.is_pending()
    }

    /// Process messages until [`Message::Shutdown`], then deactivate.
    ///
    /// A failing handler is logged and the loop keeps going.
    pub async fn run(mut self, mut receiver: UnboundedReceiver<Message>) {
        while let Some(message) = receiver.recv().await {
            if message == Message::Shutdown {
                break;
            }
            if let Err(e) = self.handle(message).await {
                tracing::error!("Failed to handle {message:?}: {e}");
            }
        }
        self.deactivate();
    }

    pub async fn handle(&mut self, message: Message) -> Result<()> {
        tracing::trace!(?message, "handling message");
        match message {
            Message::ActiveEditorChanged => self.hide_and_fold().await,
            Message::DocumentChanged => {
                self.schedule_hide();
                Ok(())
            }
            Message::DebounceElapsed => self.hide(),
            Message::Command(Command::HideSignatures) => self.hide_and_fold().await,
            Message::Command(Command::ShowSignatures) => self.show_and_unfold().await,
            Message::Shutdown => {
                self.deactivate();
                Ok(())
            }
        }
    }

    /// Decorate now, then fold.
    pub async fn hide_and_fold(&mut self) -> Result<()> {
        self.hide()?;

        let settings = self.host.settings();
        let document = self.host.active_document();
        apply_folding(&self.host, document.as_ref(), &settings).await
    }

    /// Refresh the style and unfold everything. Existing decorations stay
    /// until the next hide.
    pub async fn show_and_unfold(&mut self) -> Result<()> {
        let document = self.host.active_document();
        if target_document(document.as_ref()).is_none() {
            return Ok(());
        }

        let settings = self.host.settings();
        self.visibility.restyle(&self.host, &settings);
        if settings.enabled {
            self.host.execute_command(HostCommand::UnfoldAll).await?;
        }
        Ok(())
    }

    /// Restart the edit timer.
    pub fn schedule_hide(&mut self) {
        self.debounce.schedule(&self.sender, Message::DebounceElapsed);
    }

    fn hide(&mut self) -> Result<()> {
        let settings = self.host.settings();
        let document = self.host.active_document();
        self.visibility.apply(&self.host, document.as_ref(), &settings)
    }

    /// Cancel the pending timer, dispose the style and drop all subscriptions.
    ///
    /// Safe to call more than once.
    pub fn deactivate(&mut self) {
        self.debounce.cancel();
        self.visibility.teardown(&self.host);
        if !self.subscriptions.is_empty() {
            tracing::info!("signature hider deactivated");
        }
        self.subscriptions.clear();
    }
}

impl<H: EditorHost> Drop for AppState<H> {
    fn drop(&mut self) {
        self.deactivate();
    }
}
