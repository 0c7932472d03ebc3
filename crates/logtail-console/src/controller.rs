/*
[INPUT]:  Session settings, a ConsoleBackend, messages from timers and users
[OUTPUT]: SessionState kept current with request completions applied in order
[POS]:    Console controller - owns the session state and its dispatcher
[UPDATE]: When changing how messages reach the session core
*/

use std::sync::Arc;

use chrono::NaiveDate;
use logtail_adapter::ConsoleBackend;
use tokio::sync::mpsc;

use crate::dispatcher::Dispatcher;
use crate::session::{Msg, SessionSettings, SessionState, update};

/// Single owner of the session state.
///
/// Every mutation goes through [`Controller::handle`]; request completions are
/// queued on an internal channel and applied one at a time by the caller's
/// loop, so no locking is involved.
pub struct Controller {
    state: SessionState,
    dispatcher: Dispatcher,
    rx: mpsc::UnboundedReceiver<Msg>,
}

impl Controller {
    pub fn new(backend: Arc<dyn ConsoleBackend>, settings: SessionSettings, today: NaiveDate) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: SessionState::new(settings, today),
            dispatcher: Dispatcher::new(backend, tx),
            rx,
        }
    }

    /// Controller whose session opens on `day` instead of today.
    pub fn starting_at(
        backend: Arc<dyn ConsoleBackend>,
        settings: SessionSettings,
        day: NaiveDate,
        today: NaiveDate,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: SessionState::starting_at(settings, day, today),
            dispatcher: Dispatcher::new(backend, tx),
            rx,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Apply a message and launch the commands it produced.
    pub fn handle(&mut self, msg: Msg) {
        let commands = update(&mut self.state, msg);
        self.dispatcher.dispatch_all(commands);
    }

    /// Wait for the next request completion.
    pub async fn next_completion(&mut self) -> Option<Msg> {
        self.rx.recv().await
    }

    /// Apply every completion already queued without waiting.
    pub fn drain_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(msg) = self.rx.try_recv() {
            self.handle(msg);
            applied += 1;
        }
        applied
    }

    pub fn shutdown(&self) {
        self.dispatcher.shutdown();
    }
}
