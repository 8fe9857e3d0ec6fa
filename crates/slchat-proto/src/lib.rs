//! # slchat-proto
//!
//! Protocol types shared by the slchatd server core and its transport:
//!
//! - [`Command`]: a parsed client command, one [`CommandKind`] per verb
//! - canonical rendering of commands (`Display`), used for equality
//! - [`parse_line`]: turns a raw client line into a [`Command`]
//! - [`ServerResponse`]: the closed table of error replies
//! - [`NameExt`]: nickname and channel name validation
//!
//! ```rust
//! use slchat_proto::{parse_line, Command, CommandKind};
//!
//! let cmd = parse_line(3, "User3", "MESG Room :hello there").unwrap();
//! assert_eq!(cmd.to_string(), ":User3 MESG Room :hello there");
//! assert_eq!(
//!     cmd,
//!     Command::new(3, "User3", CommandKind::Message {
//!         channel: "Room".into(),
//!         text: "hello there".into(),
//!     })
//! );
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod command;
pub mod error;
pub mod nick;
pub mod response;

pub use command::{parse_line, Command, CommandKind, UserId};
pub use error::ParseError;
pub use nick::{is_valid_name, NameExt};
pub use response::ServerResponse;
