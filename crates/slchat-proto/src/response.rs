//! Server error replies.
//!
//! Every rejected command produces exactly one of these codes, delivered to
//! the command's sender only. Codes are three-digit numerics in the 400
//! range, in the same spirit as IRC error numerics.

#![allow(non_camel_case_types)]

use std::fmt;

/// Error reply code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum ServerResponse {
    /// 400 - Nickname or channel name is not alphanumeric
    INVALID_NAME = 400,
    /// 401 - Channel does not exist
    NO_SUCH_CHANNEL = 401,
    /// 402 - No registered user has that nickname
    NO_SUCH_USER = 402,
    /// 403 - User is not a member of the channel
    USER_NOT_IN_CHANNEL = 403,
    /// 404 - Only the channel owner may do that
    USER_NOT_OWNER = 404,
    /// 405 - Channel is invite-only
    JOIN_PRIVATE_CHANNEL = 405,
    /// 406 - Invites are only meaningful for invite-only channels
    INVITE_TO_PUBLIC_CHANNEL = 406,
    /// 407 - Nickname or channel name already taken
    NAME_ALREADY_IN_USE = 407,
}

impl ServerResponse {
    /// All codes, in numeric order.
    pub const ALL: [ServerResponse; 8] = [
        Self::INVALID_NAME,
        Self::NO_SUCH_CHANNEL,
        Self::NO_SUCH_USER,
        Self::USER_NOT_IN_CHANNEL,
        Self::USER_NOT_OWNER,
        Self::JOIN_PRIVATE_CHANNEL,
        Self::INVITE_TO_PUBLIC_CHANNEL,
        Self::NAME_ALREADY_IN_USE,
    ];

    /// Numeric code.
    #[inline]
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Look up a response by its numeric code.
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.code() == code)
    }

    /// Symbolic name, e.g. `NO_SUCH_CHANNEL`.
    pub fn name(self) -> &'static str {
        match self {
            Self::INVALID_NAME => "INVALID_NAME",
            Self::NO_SUCH_CHANNEL => "NO_SUCH_CHANNEL",
            Self::NO_SUCH_USER => "NO_SUCH_USER",
            Self::USER_NOT_IN_CHANNEL => "USER_NOT_IN_CHANNEL",
            Self::USER_NOT_OWNER => "USER_NOT_OWNER",
            Self::JOIN_PRIVATE_CHANNEL => "JOIN_PRIVATE_CHANNEL",
            Self::INVITE_TO_PUBLIC_CHANNEL => "INVITE_TO_PUBLIC_CHANNEL",
            Self::NAME_ALREADY_IN_USE => "NAME_ALREADY_IN_USE",
        }
    }

    /// Human readable reply text.
    pub fn text(self) -> &'static str {
        match self {
            Self::INVALID_NAME => "Names must be non-empty and alphanumeric",
            Self::NO_SUCH_CHANNEL => "No such channel",
            Self::NO_SUCH_USER => "No such user",
            Self::USER_NOT_IN_CHANNEL => "User is not in that channel",
            Self::USER_NOT_OWNER => "You are not the channel owner",
            Self::JOIN_PRIVATE_CHANNEL => "Cannot join an invite-only channel",
            Self::INVITE_TO_PUBLIC_CHANNEL => "Cannot invite to a public channel",
            Self::NAME_ALREADY_IN_USE => "Name is already in use",
        }
    }
}

impl fmt::Display for ServerResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.code())
    }
}
