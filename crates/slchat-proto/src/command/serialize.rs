use std::fmt;

use super::types::{Command, CommandKind};

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{} ", self.sender)?;
        match &self.kind {
            CommandKind::Nick { new_nick } => write!(f, "NICK {new_nick}"),
            CommandKind::Create {
                channel,
                invite_only,
            } => write!(f, "CREATE {} {}", channel, u8::from(*invite_only)),
            CommandKind::Join { channel } => write!(f, "JOIN {channel}"),
            CommandKind::Message { channel, text } => write!(f, "MESG {channel} :{text}"),
            CommandKind::Leave { channel } => write!(f, "LEAVE {channel}"),
            CommandKind::Invite { channel, target } => write!(f, "INVITE {channel} {target}"),
            CommandKind::Kick { channel, target } => write!(f, "KICK {channel} {target}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_forms() {
        let cases = [
            (Command::nick(0, "User0", "Zero"), ":User0 NICK Zero"),
            (Command::create(0, "User0", "Room", false), ":User0 CREATE Room 0"),
            (Command::create(0, "User0", "Priv", true), ":User0 CREATE Priv 1"),
            (Command::join(1, "User1", "Room"), ":User1 JOIN Room"),
            (
                Command::message(1, "User1", "Room", "hi :) there"),
                ":User1 MESG Room :hi :) there",
            ),
            (Command::leave(1, "User1", "Room"), ":User1 LEAVE Room"),
            (Command::invite(0, "User0", "Priv", "User2"), ":User0 INVITE Priv User2"),
            (Command::kick(0, "User0", "Room", "User1"), ":User0 KICK Room User1"),
        ];
        for (cmd, expected) in cases {
            assert_eq!(cmd.to_string(), expected);
        }
    }

    #[test]
    fn test_empty_message_keeps_trailing_marker() {
        assert_eq!(Command::message(0, "a", "b", "").to_string(), ":a MESG b :");
    }
}
