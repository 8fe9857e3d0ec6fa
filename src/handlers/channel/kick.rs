//! KICK command handler.

use super::super::helpers::{require_channel, require_member, require_owner, require_registered};
use crate::error::HandlerResult;
use crate::notification::Notification;
use crate::state::{Matrix, PartOutcome};
use slchat_proto::Command;
use tracing::info;

/// Handler for KICK.
///
/// Checks, in order:
/// 1. the target is a registered user (`NO_SUCH_USER`)
/// 2. the channel exists (`NO_SUCH_CHANNEL`)
/// 3. the sender owns the channel (`USER_NOT_OWNER`)
/// 4. the target is a member (`USER_NOT_IN_CHANNEL`)
///
/// Everyone who was a member before the kick, the kicked user included, is
/// told. Kicking the owner (only the owner can kick, so a self-kick) deletes
/// the channel.
pub(in crate::handlers) fn handle_kick(
    matrix: &mut Matrix,
    cmd: &Command,
    channel: &str,
    target: &str,
) -> HandlerResult {
    require_registered(matrix, target)?;
    let chan = require_channel(matrix, channel)?;
    require_owner(chan, &cmd.sender)?;
    require_member(chan, target)?;
    let recipients = chan.members().clone();

    let outcome = matrix.channel_manager.leave(channel, target);
    info!(
        kicker = %cmd.sender,
        target = %target,
        channel = %channel,
        destroyed = outcome == Some(PartOutcome::Destroyed),
        "User kicked from channel"
    );

    Ok(Notification::okay(cmd, recipients))
}
