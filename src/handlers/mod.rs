//! Command handlers.
//!
//! One handler per protocol verb. [`apply`] dispatches on the closed
//! [`CommandKind`] enum, so a new verb is a compile error here until it is
//! handled.
//!
//! Every handler validates in a fixed order and returns the first failing
//! check as a [`HandlerError`]; state is only written after all checks pass.
//! Recipient sets are taken from the roster *before* the change, except for
//! the roster snapshot carried by JOIN and INVITE.

mod channel;
mod connection;
mod helpers;
mod messaging;

use crate::error::HandlerResult;
use crate::notification::Notification;
use crate::state::Matrix;
use slchat_proto::{Command, CommandKind};
use tracing::debug;

/// Apply `cmd` to `matrix` and describe who must be told what.
pub fn apply(matrix: &mut Matrix, cmd: &Command) -> Notification {
    let result: HandlerResult = match &cmd.kind {
        CommandKind::Nick { new_nick } => connection::handle_nick(matrix, cmd, new_nick),
        CommandKind::Create {
            channel,
            invite_only,
        } => channel::handle_create(matrix, cmd, channel, *invite_only),
        CommandKind::Join { channel } => channel::handle_join(matrix, cmd, channel),
        CommandKind::Message { channel, .. } => messaging::handle_mesg(matrix, cmd, channel),
        CommandKind::Leave { channel } => channel::handle_leave(matrix, cmd, channel),
        CommandKind::Invite { channel, target } => {
            channel::handle_invite(matrix, cmd, channel, target)
        }
        CommandKind::Kick { channel, target } => channel::handle_kick(matrix, cmd, channel, target),
    };

    match result {
        Ok(notification) => notification,
        Err(e) => {
            debug!(
                command = cmd.verb(),
                sender = %cmd.sender,
                error = e.error_code(),
                "Command rejected: {e}"
            );
            Notification::error(cmd, e.response())
        }
    }
}
