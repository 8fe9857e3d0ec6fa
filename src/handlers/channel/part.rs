//! LEAVE command handler.

use super::super::helpers::{require_channel, require_member};
use crate::error::HandlerResult;
use crate::notification::Notification;
use crate::state::{Matrix, PartOutcome};
use slchat_proto::Command;
use tracing::info;

/// Handler for LEAVE.
///
/// Checks, in order: the channel exists (`NO_SUCH_CHANNEL`), the sender is a
/// member (`USER_NOT_IN_CHANNEL`).
///
/// Everyone who was a member before the leave, the leaver included, is
/// told. If the sender owned the channel it is deleted.
pub(in crate::handlers) fn handle_leave(
    matrix: &mut Matrix,
    cmd: &Command,
    channel: &str,
) -> HandlerResult {
    let chan = require_channel(matrix, channel)?;
    require_member(chan, &cmd.sender)?;
    let recipients = chan.members().clone();

    match matrix.channel_manager.leave(channel, &cmd.sender) {
        Some(PartOutcome::Destroyed) => {
            info!(nick = %cmd.sender, channel = %channel, "Owner left, channel destroyed");
        }
        _ => info!(nick = %cmd.sender, channel = %channel, "User left channel"),
    }

    Ok(Notification::okay(cmd, recipients))
}
