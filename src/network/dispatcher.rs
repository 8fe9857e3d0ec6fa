//! Dispatcher - the single task that owns the [`Matrix`].
//!
//! Connections send [`DispatchEvent`]s over a bounded channel. Each event is
//! applied to the state in arrival order and the resulting notification is
//! fanned out to the per-connection outbound queues.

use crate::handlers;
use crate::notification::Notification;
use crate::state::Matrix;
use crate::telemetry::spans;
use slchat_proto::{Command, UserId, parse_line};
use std::collections::BTreeMap;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

/// Events processed by the dispatcher.
#[derive(Debug)]
pub enum DispatchEvent {
    /// A connection was accepted. The generated nickname is sent back on
    /// `reply_tx`.
    Connect {
        id: UserId,
        outbound: mpsc::Sender<String>,
        reply_tx: oneshot::Sender<String>,
    },
    /// A raw line arrived from a connection.
    Line { id: UserId, line: String },
    /// The connection is gone.
    Disconnect { id: UserId },
}

/// Owns the state and the outbound queue of every registered connection.
pub struct Dispatcher {
    server_name: String,
    matrix: Matrix,
    outbound: BTreeMap<UserId, mpsc::Sender<String>>,
}

impl Dispatcher {
    pub fn new(server_name: impl Into<String>) -> Self {
        Self {
            server_name: server_name.into(),
            matrix: Matrix::new(),
            outbound: BTreeMap::new(),
        }
    }

    /// Create a dispatcher and spawn it with a mailbox of `capacity` events.
    pub fn spawn(server_name: impl Into<String>, capacity: usize) -> mpsc::Sender<DispatchEvent> {
        let (tx, rx) = mpsc::channel(capacity);
        let dispatcher = Self::new(server_name);

        tokio::spawn(async move {
            dispatcher.run(rx).await;
        });

        tx
    }

    /// The main dispatcher loop. Ends when every sender is dropped.
    pub async fn run(mut self, mut rx: mpsc::Receiver<DispatchEvent>) {
        while let Some(event) = rx.recv().await {
            self.handle_event(event);
        }
        debug!(users = self.matrix.user_manager().len(), "Dispatcher stopped");
    }

    fn handle_event(&mut self, event: DispatchEvent) {
        match event {
            DispatchEvent::Connect {
                id,
                outbound,
                reply_tx,
            } => self.handle_connect(id, outbound, reply_tx),
            DispatchEvent::Line { id, line } => self.handle_line(id, &line),
            DispatchEvent::Disconnect { id } => self.handle_disconnect(id),
        }
    }

    fn handle_connect(
        &mut self,
        id: UserId,
        outbound: mpsc::Sender<String>,
        reply_tx: oneshot::Sender<String>,
    ) {
        self.outbound.insert(id, outbound);
        let notification = self.matrix.register_user(id);

        if let Some(nick) = self.matrix.nickname(id)
            && reply_tx.send(nick.to_owned()).is_err()
        {
            debug!(id, "Connection went away before registration reply");
        }
        self.deliver(&notification, None);
    }

    fn handle_line(&mut self, id: UserId, line: &str) {
        let Some(nick) = self.matrix.nickname(id).map(str::to_owned) else {
            warn!(id, "Line from unregistered connection");
            return;
        };

        let cmd = match parse_line(id, &nick, line) {
            Ok(cmd) => cmd,
            Err(e) => {
                debug!(id, nick = %nick, error = %e, "Unparseable line");
                let reply = format!(":{} ERROR :{e}", self.server_name);
                self.send_line(id, &nick, reply);
                return;
            }
        };

        let _span = spans::command(cmd.verb(), &nick, cmd.kind.channel()).entered();
        let notification = handlers::apply(&mut self.matrix, &cmd);
        debug!(
            outcome = notification.kind(),
            recipients = notification.recipients().len(),
            "Command applied"
        );
        self.deliver(&notification, Some(&cmd));
    }

    fn handle_disconnect(&mut self, id: UserId) {
        if let Some(notification) = self.matrix.deregister_user(id) {
            self.deliver(&notification, None);
        }
        self.outbound.remove(&id);
    }

    /// Fan a notification out to the outbound queues.
    ///
    /// Recipients are addressed by nickname. After a NICK the sender's old
    /// nickname no longer resolves, so it is mapped back to the command's
    /// sender id.
    fn deliver(&self, notification: &Notification, cmd: Option<&Command>) {
        for delivery in notification.deliveries(&self.server_name) {
            let id = self.matrix.user_id(&delivery.nickname).or_else(|| {
                cmd.filter(|cmd| cmd.sender == delivery.nickname)
                    .map(|cmd| cmd.sender_id)
            });
            match id {
                Some(id) => self.send_line(id, &delivery.nickname, delivery.line),
                None => warn!(nick = %delivery.nickname, "No connection for recipient"),
            }
        }
    }

    fn send_line(&self, id: UserId, nick: &str, line: String) {
        let Some(tx) = self.outbound.get(&id) else {
            warn!(id, nick = %nick, "No outbound queue for connection");
            return;
        };
        match tx.try_send(line) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                warn!(id, nick = %nick, "Outbound queue full, dropping line");
            }
            Err(TrySendError::Closed(_)) => {
                debug!(id, nick = %nick, "Outbound queue closed, dropping line");
            }
        }
    }
}
