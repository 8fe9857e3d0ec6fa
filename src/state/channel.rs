//! Channel record.

use std::collections::BTreeSet;

/// A channel: its owner, privacy flag and member nicknames.
///
/// The owner is always a member. Once the owner is no longer a member the
/// channel is deleted by the [`ChannelManager`](super::ChannelManager), so
/// no `Channel` value ever has an owner outside its member set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    name: String,
    owner: String,
    invite_only: bool,
    members: BTreeSet<String>,
}

impl Channel {
    /// Create a channel whose only member is its owner.
    pub fn new(name: impl Into<String>, owner: impl Into<String>, invite_only: bool) -> Self {
        let owner = owner.into();
        let mut members = BTreeSet::new();
        members.insert(owner.clone());
        Self {
            name: name.into(),
            owner,
            invite_only,
            members,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Invite-only channels reject JOIN; members arrive through INVITE.
    pub fn is_private(&self) -> bool {
        self.invite_only
    }

    pub fn members(&self) -> &BTreeSet<String> {
        &self.members
    }

    pub fn is_member(&self, nick: &str) -> bool {
        self.members.contains(nick)
    }

    pub fn is_owner(&self, nick: &str) -> bool {
        self.owner == nick
    }

    /// Add a member. Returns false if already present.
    pub(crate) fn add(&mut self, nick: &str) -> bool {
        self.members.insert(nick.to_owned())
    }

    /// Remove a non-owner member. Returns false if not present.
    pub(crate) fn remove(&mut self, nick: &str) -> bool {
        self.members.remove(nick)
    }

    /// Swap `old` for `new` in the member set, and in the owner field when
    /// `old` owns the channel. Returns false if `old` is not a member.
    pub(crate) fn rename_member(&mut self, old: &str, new: &str) -> bool {
        if !self.members.remove(old) {
            return false;
        }
        self.members.insert(new.to_owned());
        if self.owner == old {
            self.owner = new.to_owned();
        }
        true
    }
}
