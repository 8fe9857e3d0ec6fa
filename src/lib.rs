//! slchatd - Straylight chat daemon.
//!
//! Users connect, receive a generated nickname, and create, join and talk in
//! named channels. The state machine lives in [`state`] and [`handlers`];
//! [`network`] puts it behind a line-based TCP listener.
//!
//! ```
//! use slchatd::handlers::apply;
//! use slchatd::state::Matrix;
//! use slchat_proto::{Command, ServerResponse};
//!
//! let mut matrix = Matrix::new();
//! matrix.register_user(0);
//! matrix.register_user(1);
//!
//! apply(&mut matrix, &Command::create(0, "User0", "Room", true));
//! let denied = apply(&mut matrix, &Command::join(1, "User1", "Room"));
//! assert_eq!(denied.response(), Some(ServerResponse::JOIN_PRIVATE_CHANNEL));
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod network;
pub mod notification;
pub mod state;
pub mod telemetry;

pub use error::{HandlerError, HandlerResult};
pub use notification::{Delivery, Notification};
