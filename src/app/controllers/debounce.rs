use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::app::domain::Message;

/// Quiet period after the last edit before signatures are re-decorated.
pub const HIDE_DELAY: Duration = Duration::from_millis(200);

/// Posts a message once the triggering events stop for `delay`.
///
/// Each [`schedule`](Self::schedule) aborts the previously pending timer, so a
/// burst of edits produces a single message. Must be used inside a tokio runtime.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(HIDE_DELAY)
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn schedule(&mut self, sender: &UnboundedSender<Message>, message: Message) {
        self.cancel();

        let delay = self.delay;
        let sender = sender.clone();
        tracing::trace!(?delay, ?message, "debounce scheduled");
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // receiver gone means we're shutting down
            let _ = sender.send(message);
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
