//! JOIN command handler.

use super::super::helpers::require_channel;
use crate::error::{HandlerError, HandlerResult};
use crate::notification::Notification;
use crate::state::Matrix;
use slchat_proto::Command;
use tracing::info;

/// Handler for JOIN.
///
/// Checks, in order: the channel exists (`NO_SUCH_CHANNEL`), the channel is
/// not invite-only (`JOIN_PRIVATE_CHANNEL`).
///
/// Members present before the join see the JOIN; the joiner receives the
/// post-join roster and owner. Joining a channel one is already in does not
/// grow the member set.
pub(in crate::handlers) fn handle_join(
    matrix: &mut Matrix,
    cmd: &Command,
    channel: &str,
) -> HandlerResult {
    let chan = require_channel(matrix, channel)?;
    if chan.is_private() {
        return Err(HandlerError::JoinPrivateChannel(channel.to_owned()));
    }
    let before = chan.members().clone();

    let added = matrix.channel_manager.join(channel, &cmd.sender);
    let chan = require_channel(matrix, channel)?;
    info!(nick = %cmd.sender, channel = %channel, added, "User joined channel");

    Ok(Notification::names(
        cmd,
        before,
        cmd.sender.as_str(),
        channel,
        chan.members().iter().cloned(),
        chan.owner(),
    ))
}
