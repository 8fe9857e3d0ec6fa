//! CREATE command handler.

use crate::error::{HandlerError, HandlerResult};
use crate::notification::Notification;
use crate::state::Matrix;
use slchat_proto::{Command, NameExt};
use tracing::info;

/// Handler for CREATE.
///
/// Checks, in order: no channel already has the name
/// (`NAME_ALREADY_IN_USE`), the name is valid (`INVALID_NAME`). The sender
/// becomes owner and sole member; only the sender is told.
///
/// An existing channel is never replaced: CREATE on a taken name fails and
/// leaves its owner, members and privacy flag as they were.
pub(in crate::handlers) fn handle_create(
    matrix: &mut Matrix,
    cmd: &Command,
    channel: &str,
    invite_only: bool,
) -> HandlerResult {
    if matrix.channel_manager.exists(channel) {
        return Err(HandlerError::NameInUse(channel.to_owned()));
    }
    if !channel.is_valid_name() {
        return Err(HandlerError::InvalidName(channel.to_owned()));
    }

    matrix
        .channel_manager
        .create(channel, &cmd.sender, invite_only);
    info!(channel = %channel, owner = %cmd.sender, invite_only, "Channel created");

    Ok(Notification::okay(cmd, [cmd.sender.as_str()]))
}
