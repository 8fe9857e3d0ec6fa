//! The Matrix: authoritative server state.
//!
//! The Matrix owns the identity registry and the channel store. It is
//! created once by the dispatcher and passed by `&mut` into every command
//! application; nothing else holds references into it.

use super::managers::{ChannelManager, UserManager};
use crate::notification::Notification;
use slchat_proto::UserId;
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

/// Users, channels and membership.
///
/// The Matrix performs no locking. Callers must apply at most one mutation
/// at a time; the network layer does so by giving the Matrix to a single
/// dispatcher task.
#[derive(Debug, Default)]
pub struct Matrix {
    pub(crate) user_manager: UserManager,
    pub(crate) channel_manager: ChannelManager,
}

impl Matrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new connection and tell it its generated nickname.
    pub fn register_user(&mut self, id: UserId) -> Notification {
        let nick = self.user_manager.register(id);
        info!(id, nick = %nick, "User registered");
        Notification::connected(nick)
    }

    /// Forget a connection.
    ///
    /// The user leaves every channel; channels it owned are deleted. Everyone
    /// who shared a channel with it is told. Returns `None` if `id` was not
    /// registered, which is a caller error.
    pub fn deregister_user(&mut self, id: UserId) -> Option<Notification> {
        let Some(nick) = self.user_manager.deregister(id) else {
            warn!(id, "Deregister for unknown connection id");
            return None;
        };

        let peers = self.channel_manager.peers_of(&nick);
        let destroyed = self.channel_manager.remove_user(&nick);
        for channel in &destroyed {
            debug!(channel = %channel, owner = %nick, "Channel destroyed (owner disconnected)");
        }
        info!(
            id,
            nick = %nick,
            peers = peers.len(),
            destroyed = destroyed.len(),
            "User deregistered"
        );

        Some(Notification::disconnected(nick, peers))
    }

    /// Rename `id` and propagate the change into every channel it belongs
    /// to. Validity and uniqueness are the caller's responsibility.
    pub(crate) fn rename_user(&mut self, id: UserId, new_nick: &str) {
        let Some(old) = self.user_manager.rename(id, new_nick) else {
            warn!(id, new_nick, "Rename for unknown connection id");
            return;
        };
        let touched = self.channel_manager.rename_member(&old, new_nick);
        debug!(old = %old, new = %new_nick, channels = touched, "Nickname propagated");
    }

    /// Read access to the identity registry.
    pub fn user_manager(&self) -> &UserManager {
        &self.user_manager
    }

    /// Read access to the channel store.
    pub fn channel_manager(&self) -> &ChannelManager {
        &self.channel_manager
    }

    pub fn nickname(&self, id: UserId) -> Option<&str> {
        self.user_manager.nickname(id)
    }

    pub fn user_id(&self, nick: &str) -> Option<UserId> {
        self.user_manager.user_id(nick)
    }

    /// Snapshot of every registered nickname.
    pub fn registered_users(&self) -> BTreeSet<String> {
        self.user_manager.nicknames()
    }

    /// Snapshot of every channel name.
    pub fn channels(&self) -> BTreeSet<String> {
        self.channel_manager.names()
    }

    /// Snapshot of a channel's members; empty if it does not exist.
    pub fn users_in_channel(&self, channel: &str) -> BTreeSet<String> {
        self.channel_manager.members(channel)
    }

    pub fn owner(&self, channel: &str) -> Option<&str> {
        self.channel_manager.owner(channel)
    }

    /// Everyone sharing a channel with `nick`, excluding `nick`.
    pub fn other_users(&self, nick: &str) -> BTreeSet<String> {
        self.channel_manager.peers_of(nick)
    }
}
