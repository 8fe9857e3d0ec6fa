//! Command types.

/// Opaque connection identifier assigned by the transport.
pub type UserId = u64;

/// Verb-specific payload of a client command.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandKind {
    /// `NICK <new>`
    Nick {
        /// Requested nickname.
        new_nick: String,
    },
    /// `CREATE <channel> <0|1>`
    Create {
        /// Channel to create.
        channel: String,
        /// Whether the channel is invite-only.
        invite_only: bool,
    },
    /// `JOIN <channel>`
    Join {
        /// Channel to join.
        channel: String,
    },
    /// `MESG <channel> :<text>`
    Message {
        /// Target channel.
        channel: String,
        /// Message body.
        text: String,
    },
    /// `LEAVE <channel>`
    Leave {
        /// Channel to leave.
        channel: String,
    },
    /// `INVITE <channel> <user>`
    Invite {
        /// Invite-only channel owned by the sender.
        channel: String,
        /// Nickname of the user to add.
        target: String,
    },
    /// `KICK <channel> <user>`
    Kick {
        /// Channel owned by the sender.
        channel: String,
        /// Nickname of the member to remove.
        target: String,
    },
}

impl CommandKind {
    /// Protocol verb for this payload.
    pub fn verb(&self) -> &'static str {
        match self {
            CommandKind::Nick { .. } => "NICK",
            CommandKind::Create { .. } => "CREATE",
            CommandKind::Join { .. } => "JOIN",
            CommandKind::Message { .. } => "MESG",
            CommandKind::Leave { .. } => "LEAVE",
            CommandKind::Invite { .. } => "INVITE",
            CommandKind::Kick { .. } => "KICK",
        }
    }

    /// Channel the command targets, if any.
    pub fn channel(&self) -> Option<&str> {
        match self {
            CommandKind::Nick { .. } => None,
            CommandKind::Create { channel, .. }
            | CommandKind::Join { channel }
            | CommandKind::Message { channel, .. }
            | CommandKind::Leave { channel }
            | CommandKind::Invite { channel, .. }
            | CommandKind::Kick { channel, .. } => Some(channel),
        }
    }
}

/// A client command after parsing.
///
/// Carries the sender's connection id and the nickname the sender had when
/// the command was issued. Two commands are equal when their canonical
/// renderings are equal; the sender id does not take part.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Command {
    /// Connection id of the sender.
    pub sender_id: UserId,
    /// Sender's nickname at the time of issue.
    pub sender: String,
    /// Verb and arguments.
    pub kind: CommandKind,
}

impl Command {
    /// Build a command.
    pub fn new(sender_id: UserId, sender: impl Into<String>, kind: CommandKind) -> Self {
        Self {
            sender_id,
            sender: sender.into(),
            kind,
        }
    }

    /// `NICK` shorthand.
    pub fn nick(sender_id: UserId, sender: impl Into<String>, new_nick: impl Into<String>) -> Self {
        Self::new(
            sender_id,
            sender,
            CommandKind::Nick {
                new_nick: new_nick.into(),
            },
        )
    }

    /// `CREATE` shorthand.
    pub fn create(
        sender_id: UserId,
        sender: impl Into<String>,
        channel: impl Into<String>,
        invite_only: bool,
    ) -> Self {
        Self::new(
            sender_id,
            sender,
            CommandKind::Create {
                channel: channel.into(),
                invite_only,
            },
        )
    }

    /// `JOIN` shorthand.
    pub fn join(sender_id: UserId, sender: impl Into<String>, channel: impl Into<String>) -> Self {
        Self::new(
            sender_id,
            sender,
            CommandKind::Join {
                channel: channel.into(),
            },
        )
    }

    /// `MESG` shorthand.
    pub fn message(
        sender_id: UserId,
        sender: impl Into<String>,
        channel: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self::new(
            sender_id,
            sender,
            CommandKind::Message {
                channel: channel.into(),
                text: text.into(),
            },
        )
    }

    /// `LEAVE` shorthand.
    pub fn leave(sender_id: UserId, sender: impl Into<String>, channel: impl Into<String>) -> Self {
        Self::new(
            sender_id,
            sender,
            CommandKind::Leave {
                channel: channel.into(),
            },
        )
    }

    /// `INVITE` shorthand.
    pub fn invite(
        sender_id: UserId,
        sender: impl Into<String>,
        channel: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self::new(
            sender_id,
            sender,
            CommandKind::Invite {
                channel: channel.into(),
                target: target.into(),
            },
        )
    }

    /// `KICK` shorthand.
    pub fn kick(
        sender_id: UserId,
        sender: impl Into<String>,
        channel: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self::new(
            sender_id,
            sender,
            CommandKind::Kick {
                channel: channel.into(),
                target: target.into(),
            },
        )
    }

    /// Protocol verb.
    #[inline]
    pub fn verb(&self) -> &'static str {
        self.kind.verb()
    }
}

impl PartialEq for Command {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for Command {}
