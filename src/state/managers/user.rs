//! User management state and behavior.
//!
//! This module contains the `UserManager` struct: the identity registry that
//! maps connection ids to nicknames.

use slchat_proto::UserId;
use std::collections::{BTreeMap, BTreeSet};

/// Prefix of generated default nicknames.
pub const DEFAULT_NICK_PREFIX: &str = "User";

/// Maps connection ids to nicknames and back.
///
/// The UserManager is responsible for:
/// - Assigning default nicknames to new connections.
/// - Keeping nicknames unique across registered users.
/// - Answering lookups in both directions.
///
/// Validity and uniqueness of a *requested* nickname are checked by the NICK
/// handler before [`rename`](Self::rename) is called.
#[derive(Debug, Default)]
pub struct UserManager {
    users: BTreeMap<UserId, String>,
    nicks: BTreeMap<String, UserId>,
}

impl UserManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `id` under a freshly generated nickname and return it.
    ///
    /// Registering an id twice is a caller error; the old nickname is
    /// released so the two maps stay consistent.
    pub fn register(&mut self, id: UserId) -> String {
        if let Some(stale) = self.users.remove(&id) {
            self.nicks.remove(&stale);
        }
        let nick = self.generate_nick();
        self.users.insert(id, nick.clone());
        self.nicks.insert(nick.clone(), id);
        nick
    }

    /// `"User" + n` for the smallest `n >= 0` not currently in use.
    fn generate_nick(&self) -> String {
        let mut n: u64 = 0;
        loop {
            let candidate = format!("{DEFAULT_NICK_PREFIX}{n}");
            if !self.nicks.contains_key(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    /// Remove `id`, returning the nickname it held.
    pub fn deregister(&mut self, id: UserId) -> Option<String> {
        let nick = self.users.remove(&id)?;
        self.nicks.remove(&nick);
        Some(nick)
    }

    /// Point `id` at `new_nick`, returning the previous nickname. Unknown
    /// ids are left unregistered and yield `None`.
    pub fn rename(&mut self, id: UserId, new_nick: &str) -> Option<String> {
        let entry = self.users.get_mut(&id)?;
        let old = std::mem::replace(entry, new_nick.to_owned());
        self.nicks.remove(&old);
        self.nicks.insert(new_nick.to_owned(), id);
        Some(old)
    }

    pub fn user_id(&self, nick: &str) -> Option<UserId> {
        self.nicks.get(nick).copied()
    }

    pub fn nickname(&self, id: UserId) -> Option<&str> {
        self.users.get(&id).map(String::as_str)
    }

    /// Whether any registered user currently holds `nick`.
    pub fn is_registered(&self, nick: &str) -> bool {
        self.nicks.contains_key(nick)
    }

    /// Snapshot of every registered nickname.
    pub fn nicknames(&self) -> BTreeSet<String> {
        self.nicks.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
