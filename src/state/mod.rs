//! State management module.
//!
//! Contains the Matrix (authoritative server state) and the two managers it
//! owns: the identity registry and the channel store.

mod channel;
mod managers;
mod matrix;
mod uid;

pub use channel::Channel;
pub use managers::{ChannelManager, PartOutcome, UserManager};
pub use matrix::Matrix;
pub use uid::IdGenerator;
pub use slchat_proto::UserId;
