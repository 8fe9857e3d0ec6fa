//! Channel management state.
//!
//! This module contains the `ChannelManager` struct: the channel store that
//! owns every [`Channel`] record, indexed by name.

use crate::state::Channel;
use std::collections::{BTreeMap, BTreeSet};

/// What happened to a channel when a member left it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOutcome {
    /// A non-owner was removed; the channel lives on.
    Left,
    /// The owner left, so the channel was deleted.
    Destroyed,
}

/// Channel store.
///
/// The ChannelManager is responsible for:
/// - Creating and deleting channel records.
/// - Membership changes (join, leave, rename propagation).
/// - Membership queries by channel and by nickname.
///
/// Name validity and duplicate names are checked by the CREATE handler;
/// the store does not re-validate.
#[derive(Debug, Default)]
pub struct ChannelManager {
    channels: BTreeMap<String, Channel>,
}

impl ChannelManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create `name` with `owner` as its only member.
    pub fn create(&mut self, name: &str, owner: &str, invite_only: bool) {
        self.channels
            .insert(name.to_owned(), Channel::new(name, owner, invite_only));
    }

    /// Add `nick` to `name`. Returns true if the member set grew; joining
    /// twice is a no-op.
    pub fn join(&mut self, name: &str, nick: &str) -> bool {
        self.channels
            .get_mut(name)
            .is_some_and(|chan| chan.add(nick))
    }

    /// Remove `nick` from `name`, deleting the channel if `nick` owns it.
    ///
    /// Returns `None` when the channel does not exist.
    pub fn leave(&mut self, name: &str, nick: &str) -> Option<PartOutcome> {
        let chan = self.channels.get_mut(name)?;
        if chan.is_owner(nick) {
            self.channels.remove(name);
            Some(PartOutcome::Destroyed)
        } else {
            chan.remove(nick);
            Some(PartOutcome::Left)
        }
    }

    /// Propagate a nickname change to every channel `old` belongs to,
    /// including the owner field. Returns the number of channels touched.
    pub fn rename_member(&mut self, old: &str, new: &str) -> usize {
        self.channels
            .values_mut()
            .map(|chan| chan.rename_member(old, new))
            .filter(|touched| *touched)
            .count()
    }

    /// Remove `nick` from every channel, deleting the ones it owns.
    /// Returns the names of the deleted channels.
    pub fn remove_user(&mut self, nick: &str) -> Vec<String> {
        let mut destroyed = Vec::new();
        self.channels.retain(|name, chan| {
            if chan.is_owner(nick) {
                destroyed.push(name.clone());
                false
            } else {
                chan.remove(nick);
                true
            }
        });
        destroyed
    }

    pub fn get(&self, name: &str) -> Option<&Channel> {
        self.channels.get(name)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.channels.contains_key(name)
    }

    /// Snapshot of the members of `name`; empty if the channel does not exist.
    pub fn members(&self, name: &str) -> BTreeSet<String> {
        self.channels
            .get(name)
            .map(|chan| chan.members().clone())
            .unwrap_or_default()
    }

    pub fn owner(&self, name: &str) -> Option<&str> {
        self.channels.get(name).map(Channel::owner)
    }

    pub fn is_private(&self, name: &str) -> Option<bool> {
        self.channels.get(name).map(Channel::is_private)
    }

    pub fn is_member(&self, name: &str, nick: &str) -> bool {
        self.channels
            .get(name)
            .is_some_and(|chan| chan.is_member(nick))
    }

    /// Names of every channel `nick` is a member of.
    pub fn channels_containing(&self, nick: &str) -> BTreeSet<String> {
        self.channels
            .values()
            .filter(|chan| chan.is_member(nick))
            .map(|chan| chan.name().to_owned())
            .collect()
    }

    /// Every nickname sharing at least one channel with `nick`, excluding
    /// `nick` itself.
    pub fn peers_of(&self, nick: &str) -> BTreeSet<String> {
        let mut peers: BTreeSet<String> = self
            .channels
            .values()
            .filter(|chan| chan.is_member(nick))
            .flat_map(|chan| chan.members().iter().cloned())
            .collect();
        peers.remove(nick);
        peers
    }

    /// Snapshot of all channel names.
    pub fn names(&self) -> BTreeSet<String> {
        self.channels.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
