//! Precondition checks shared by the handlers.
//!
//! Two different existence checks live here and are kept apart on purpose:
//! [`require_registered`] asks the identity registry whether *anyone* holds a
//! nickname, while [`require_member`] asks a channel whether a nickname is in
//! its member set. They produce different error codes.

use crate::error::HandlerError;
use crate::state::{Channel, Matrix};

/// The channel, or `NoSuchChannel`.
pub(super) fn require_channel<'m>(
    matrix: &'m Matrix,
    channel: &str,
) -> Result<&'m Channel, HandlerError> {
    matrix
        .channel_manager
        .get(channel)
        .ok_or_else(|| HandlerError::NoSuchChannel(channel.to_owned()))
}

/// `nick` is held by some registered user, or `NoSuchUser`.
pub(super) fn require_registered(matrix: &Matrix, nick: &str) -> Result<(), HandlerError> {
    if matrix.user_manager.is_registered(nick) {
        Ok(())
    } else {
        Err(HandlerError::NoSuchUser(nick.to_owned()))
    }
}

/// `nick` is in `chan`'s member set, or `UserNotInChannel`.
pub(super) fn require_member(chan: &Channel, nick: &str) -> Result<(), HandlerError> {
    if chan.is_member(nick) {
        Ok(())
    } else {
        Err(HandlerError::UserNotInChannel {
            nick: nick.to_owned(),
            channel: chan.name().to_owned(),
        })
    }
}

/// `nick` owns `chan`, or `NotOwner`.
pub(super) fn require_owner(chan: &Channel, nick: &str) -> Result<(), HandlerError> {
    if chan.is_owner(nick) {
        Ok(())
    } else {
        Err(HandlerError::NotOwner(chan.name().to_owned()))
    }
}
