//! Unified error handling for slchatd.
//!
//! Every rejected command maps to exactly one [`HandlerError`], which in turn
//! maps to one wire-level [`ServerResponse`] code.

use crate::notification::Notification;
use slchat_proto::ServerResponse;
use thiserror::Error;

// ============================================================================
// Handler Errors (command processing)
// ============================================================================

/// Errors that can occur during command handling.
///
/// These are expected, recoverable outcomes. None of them is a fault: each is
/// reported to the command's sender and leaves state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    #[error("name already in use: {0}")]
    NameInUse(String),

    #[error("invalid name: {0}")]
    InvalidName(String),

    #[error("no such channel: {0}")]
    NoSuchChannel(String),

    #[error("no such user: {0}")]
    NoSuchUser(String),

    #[error("user {nick} is not in channel {channel}")]
    UserNotInChannel { nick: String, channel: String },

    #[error("not the owner of {0}")]
    NotOwner(String),

    #[error("cannot join invite-only channel {0}")]
    JoinPrivateChannel(String),

    #[error("cannot invite to public channel {0}")]
    InviteToPublicChannel(String),
}

impl HandlerError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NameInUse(_) => "name_in_use",
            Self::InvalidName(_) => "invalid_name",
            Self::NoSuchChannel(_) => "no_such_channel",
            Self::NoSuchUser(_) => "no_such_user",
            Self::UserNotInChannel { .. } => "user_not_in_channel",
            Self::NotOwner(_) => "not_owner",
            Self::JoinPrivateChannel(_) => "join_private_channel",
            Self::InviteToPublicChannel(_) => "invite_to_public_channel",
        }
    }

    /// The reply code sent to the client.
    pub fn response(&self) -> ServerResponse {
        match self {
            Self::NameInUse(_) => ServerResponse::NAME_ALREADY_IN_USE,
            Self::InvalidName(_) => ServerResponse::INVALID_NAME,
            Self::NoSuchChannel(_) => ServerResponse::NO_SUCH_CHANNEL,
            Self::NoSuchUser(_) => ServerResponse::NO_SUCH_USER,
            Self::UserNotInChannel { .. } => ServerResponse::USER_NOT_IN_CHANNEL,
            Self::NotOwner(_) => ServerResponse::USER_NOT_OWNER,
            Self::JoinPrivateChannel(_) => ServerResponse::JOIN_PRIVATE_CHANNEL,
            Self::InviteToPublicChannel(_) => ServerResponse::INVITE_TO_PUBLIC_CHANNEL,
        }
    }
}

/// Result type for command handlers.
pub type HandlerResult = Result<Notification, HandlerError>;
