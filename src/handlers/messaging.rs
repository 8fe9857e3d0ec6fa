//! MESG command handler.

use super::helpers::{require_channel, require_member};
use crate::error::HandlerResult;
use crate::notification::Notification;
use crate::state::Matrix;
use slchat_proto::Command;
use tracing::debug;

/// Handler for MESG.
///
/// Checks, in order: the channel exists (`NO_SUCH_CHANNEL`), the sender is a
/// member (`USER_NOT_IN_CHANNEL`). No state changes; every current member,
/// the sender included, receives the message.
pub(super) fn handle_mesg(matrix: &mut Matrix, cmd: &Command, channel: &str) -> HandlerResult {
    let chan = require_channel(matrix, channel)?;
    require_member(chan, &cmd.sender)?;

    debug!(sender = %cmd.sender, channel = %channel, members = chan.members().len(), "Message relayed");
    Ok(Notification::okay(cmd, chan.members().iter().cloned()))
}
