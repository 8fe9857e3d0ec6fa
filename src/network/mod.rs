//! Network layer: TCP listener, per-connection tasks and the dispatcher.
//!
//! ```text
//!  Gateway ──accept──▶ Connection task ──DispatchEvent──▶ Dispatcher (owns Matrix)
//!                          ▲                                  │
//!                          └──────── outbound lines ◀─────────┘
//! ```
//!
//! Connection tasks never touch the state. The dispatcher applies events one
//! at a time, so every state change is serialized.

mod connection;
mod dispatcher;
mod gateway;

pub use connection::Connection;
pub use dispatcher::{DispatchEvent, Dispatcher};
pub use gateway::Gateway;
