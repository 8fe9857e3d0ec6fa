//! Notifications: the result of every state transition.
//!
//! A [`Notification`] says who must be told what. It is independent of any
//! wire encoding; [`Notification::deliveries`] renders the line-based form
//! the bundled TCP transport writes to sockets.

use slchat_proto::{Command, ServerResponse};
use std::collections::BTreeSet;

/// Collect nicknames into an ordered set.
fn nick_set<I, S>(nicks: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    nicks.into_iter().map(Into::into).collect()
}

/// The outcome of a connect, disconnect or command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Command rejected; only the sender is told.
    Error {
        command: Command,
        response: ServerResponse,
    },
    /// Command applied; every recipient sees the command echoed.
    Okay {
        command: Command,
        recipients: BTreeSet<String>,
    },
    /// A member was added (JOIN or INVITE). Recipients see the command; the
    /// added member additionally receives the post-change roster.
    Names {
        command: Command,
        recipients: BTreeSet<String>,
        joiner: String,
        channel: String,
        members: BTreeSet<String>,
        owner: String,
    },
    /// A connection was registered under `nickname`.
    Connected { nickname: String },
    /// `nickname` disconnected; recipients shared a channel with it.
    Disconnected {
        nickname: String,
        recipients: BTreeSet<String>,
    },
}

/// One line addressed to one nickname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub nickname: String,
    pub line: String,
}

impl Delivery {
    fn new(nickname: &str, line: impl Into<String>) -> Self {
        Self {
            nickname: nickname.to_owned(),
            line: line.into(),
        }
    }
}

impl Notification {
    pub fn error(command: &Command, response: ServerResponse) -> Self {
        Self::Error {
            command: command.clone(),
            response,
        }
    }

    pub fn okay<I, S>(command: &Command, recipients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Okay {
            command: command.clone(),
            recipients: nick_set(recipients),
        }
    }

    /// Roster snapshot after `joiner` was added to `channel`.
    ///
    /// `recipients` is the membership before the change; `members` and
    /// `owner` describe the channel after it.
    pub fn names<I, S, M, T>(
        command: &Command,
        recipients: I,
        joiner: impl Into<String>,
        channel: impl Into<String>,
        members: M,
        owner: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        M: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::Names {
            command: command.clone(),
            recipients: nick_set(recipients),
            joiner: joiner.into(),
            channel: channel.into(),
            members: nick_set(members),
            owner: owner.into(),
        }
    }

    pub fn connected(nickname: impl Into<String>) -> Self {
        Self::Connected {
            nickname: nickname.into(),
        }
    }

    pub fn disconnected<I, S>(nickname: impl Into<String>, recipients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Disconnected {
            nickname: nickname.into(),
            recipients: nick_set(recipients),
        }
    }

    /// Short label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Error { .. } => "error",
            Self::Okay { .. } => "okay",
            Self::Names { .. } => "names",
            Self::Connected { .. } => "connected",
            Self::Disconnected { .. } => "disconnected",
        }
    }

    /// The command this notification answers, if any.
    pub fn command(&self) -> Option<&Command> {
        match self {
            Self::Error { command, .. }
            | Self::Okay { command, .. }
            | Self::Names { command, .. } => Some(command),
            Self::Connected { .. } | Self::Disconnected { .. } => None,
        }
    }

    pub fn response(&self) -> Option<ServerResponse> {
        match self {
            Self::Error { response, .. } => Some(*response),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Everyone who receives at least one line.
    pub fn recipients(&self) -> BTreeSet<String> {
        match self {
            Self::Error { command, .. } => nick_set([command.sender.as_str()]),
            Self::Okay { recipients, .. } | Self::Disconnected { recipients, .. } => {
                recipients.clone()
            }
            Self::Names {
                recipients, joiner, ..
            } => {
                let mut all = recipients.clone();
                all.insert(joiner.clone());
                all
            }
            Self::Connected { nickname } => nick_set([nickname.as_str()]),
        }
    }

    /// Render to per-nickname lines.
    ///
    /// ```text
    /// error         -> sender:     :<server> <code> <sender> :<text>
    /// okay          -> recipients: <command>
    /// names         -> recipients: <command>
    ///                  joiner:     <command>, :<server> NAMES <chan> :@<owner> <member>...
    /// connected     -> user:       :<server> CONNECTED <nick>
    /// disconnected  -> recipients: :<nick> QUIT
    /// ```
    pub fn deliveries(&self, server_name: &str) -> Vec<Delivery> {
        match self {
            Self::Error { command, response } => vec![Delivery::new(
                &command.sender,
                format!(
                    ":{server_name} {response} {} :{}",
                    command.sender,
                    response.text()
                ),
            )],
            Self::Okay {
                command,
                recipients,
            } => {
                let line = command.to_string();
                recipients
                    .iter()
                    .map(|nick| Delivery::new(nick, line.clone()))
                    .collect()
            }
            Self::Names {
                command,
                recipients,
                joiner,
                channel,
                members,
                owner,
            } => {
                let line = command.to_string();
                let mut out: Vec<Delivery> = recipients
                    .iter()
                    .filter(|nick| *nick != joiner)
                    .map(|nick| Delivery::new(nick, line.clone()))
                    .collect();
                out.push(Delivery::new(joiner, line));
                out.push(Delivery::new(
                    joiner,
                    format!(
                        ":{server_name} NAMES {channel} :{}",
                        names_list(members, owner)
                    ),
                ));
                out
            }
            Self::Connected { nickname } => vec![Delivery::new(
                nickname,
                format!(":{server_name} CONNECTED {nickname}"),
            )],
            Self::Disconnected {
                nickname,
                recipients,
            } => recipients
                .iter()
                .map(|nick| Delivery::new(nick, format!(":{nickname} QUIT")))
                .collect(),
        }
    }
}

/// `@owner` first, then the other members in order.
fn names_list(members: &BTreeSet<String>, owner: &str) -> String {
    let mut parts = Vec::with_capacity(members.len());
    parts.push(format!("@{owner}"));
    parts.extend(
        members
            .iter()
            .filter(|nick| nick.as_str() != owner)
            .cloned(),
    );
    parts.join(" ")
}
