//! NICK command handler.

use crate::error::{HandlerError, HandlerResult};
use crate::notification::Notification;
use crate::state::Matrix;
use slchat_proto::{Command, NameExt};
use tracing::info;

/// Handler for NICK.
///
/// Checks, in order:
/// 1. `new_nick` is not held by any registered user (`NAME_ALREADY_IN_USE`).
///    The sender's own current nickname counts, so renaming to it fails.
/// 2. `new_nick` is a valid name (`INVALID_NAME`).
///
/// On success everyone who shares a channel with the sender, plus the
/// sender, sees the NICK. That set is computed before the rename.
pub(super) fn handle_nick(matrix: &mut Matrix, cmd: &Command, new_nick: &str) -> HandlerResult {
    if matrix.user_manager.is_registered(new_nick) {
        return Err(HandlerError::NameInUse(new_nick.to_owned()));
    }
    if !new_nick.is_valid_name() {
        return Err(HandlerError::InvalidName(new_nick.to_owned()));
    }

    let mut recipients = matrix.channel_manager.peers_of(&cmd.sender);
    recipients.insert(cmd.sender.clone());

    matrix.rename_user(cmd.sender_id, new_nick);
    info!(old = %cmd.sender, new = %new_nick, "Nickname changed");

    Ok(Notification::okay(cmd, recipients))
}
