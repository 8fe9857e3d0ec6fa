//! State managers owned by the [`Matrix`](super::Matrix).

mod channel;
mod user;

pub use channel::{ChannelManager, PartOutcome};
pub use user::UserManager;
