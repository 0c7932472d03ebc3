/*
[INPUT]:  Commands produced by the session core, a ConsoleBackend
[OUTPUT]: Spawned request tasks whose completions come back as messages
[POS]:    Effect layer - async execution of session commands
[UPDATE]: When adding command variants or changing cancellation rules
*/

use std::sync::Arc;

use logtail_adapter::ConsoleBackend;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::session::{Command, Msg, RequestFailure};

/// Run one command to completion and translate the result into a message.
///
/// `CancelLogs` has no request behind it and yields `None`.
pub async fn perform(backend: &dyn ConsoleBackend, command: Command) -> Option<Msg> {
    match command {
        Command::FetchLogs(request) => {
            let outcome = backend
                .fetch_logs(&request.query)
                .await
                .map_err(RequestFailure::from);
            Some(Msg::LogsLoaded {
                epoch: request.epoch,
                outcome,
            })
        }
        Command::FetchHistory => {
            let result = backend.command_list().await.map_err(RequestFailure::from);
            Some(Msg::HistoryLoaded(result))
        }
        Command::Execute(cmd) => {
            let result = backend
                .execute_command(&cmd)
                .await
                .map_err(RequestFailure::from);
            Some(Msg::CommandExecuted(result))
        }
        Command::ClearLogs(query) => {
            let result = backend.clear_logs(&query).await.map_err(RequestFailure::from);
            Some(Msg::LogsCleared(result))
        }
        Command::CancelLogs => None,
    }
}

/// Executes commands on the tokio runtime and reports completions on `tx`.
pub struct Dispatcher {
    backend: Arc<dyn ConsoleBackend>,
    tx: mpsc::UnboundedSender<Msg>,
    shutdown: CancellationToken,
    logs_token: CancellationToken,
}

impl Dispatcher {
    pub fn new(backend: Arc<dyn ConsoleBackend>, tx: mpsc::UnboundedSender<Msg>) -> Self {
        let shutdown = CancellationToken::new();
        let logs_token = shutdown.child_token();
        Self {
            backend,
            tx,
            shutdown,
            logs_token,
        }
    }

    pub fn dispatch_all(&mut self, commands: Vec<Command>) {
        for command in commands {
            self.dispatch(command);
        }
    }

    pub fn dispatch(&mut self, command: Command) {
        let token = match &command {
            Command::CancelLogs => {
                debug!("cancelling in-flight log fetch");
                self.logs_token.cancel();
                self.logs_token = self.shutdown.child_token();
                return;
            }
            Command::FetchLogs(_) => self.logs_token.clone(),
            _ => self.shutdown.clone(),
        };

        let backend = self.backend.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!("request cancelled before completion");
                }
                maybe_msg = perform(backend.as_ref(), command) => {
                    if let Some(msg) = maybe_msg {
                        let _ = tx.send(msg);
                    }
                }
            }
        });
    }

    /// Cancel every request still in flight.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
