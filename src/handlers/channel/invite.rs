//! INVITE command handler.

use super::super::helpers::{require_channel, require_owner, require_registered};
use crate::error::{HandlerError, HandlerResult};
use crate::notification::Notification;
use crate::state::Matrix;
use slchat_proto::Command;
use tracing::info;

/// Handler for INVITE.
///
/// Checks, in order:
/// 1. the invitee is a registered user (`NO_SUCH_USER`)
/// 2. the channel exists (`NO_SUCH_CHANNEL`)
/// 3. the channel is invite-only (`INVITE_TO_PUBLIC_CHANNEL`)
/// 4. the sender owns the channel (`USER_NOT_OWNER`)
///
/// The invitee is added directly. Members before the invite see the INVITE;
/// the invitee receives the post-invite roster and owner.
pub(in crate::handlers) fn handle_invite(
    matrix: &mut Matrix,
    cmd: &Command,
    channel: &str,
    target: &str,
) -> HandlerResult {
    require_registered(matrix, target)?;
    let chan = require_channel(matrix, channel)?;
    if !chan.is_private() {
        return Err(HandlerError::InviteToPublicChannel(channel.to_owned()));
    }
    require_owner(chan, &cmd.sender)?;
    let before = chan.members().clone();

    matrix.channel_manager.join(channel, target);
    let chan = require_channel(matrix, channel)?;
    info!(inviter = %cmd.sender, target = %target, channel = %channel, "User invited to channel");

    Ok(Notification::names(
        cmd,
        before,
        target,
        channel,
        chan.members().iter().cloned(),
        chan.owner(),
    ))
}
