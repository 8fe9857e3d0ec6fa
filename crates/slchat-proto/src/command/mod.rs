//! Client commands.
//!
//! - [`types`]: the [`Command`] value and its per-verb [`CommandKind`]
//! - [`serialize`]: canonical `:<sender> VERB args` rendering
//! - [`parse`]: raw line to [`Command`]

mod parse;
mod serialize;
mod types;

pub use parse::parse_line;
pub use types::{Command, CommandKind, UserId};
