//! Standardized tracing spans.

/// Span constructors shared by the network layer.
pub mod spans {
    use slchat_proto::UserId;
    use std::net::SocketAddr;
    use tracing::{Span, info_span};

    /// Create a span for a client connection.
    pub fn connection(id: UserId, addr: SocketAddr) -> Span {
        info_span!("connection", id, addr = %addr)
    }

    /// Create a span for a command execution.
    pub fn command(name: &str, source: &str, target: Option<&str>) -> Span {
        if let Some(target) = target {
            info_span!("command", name = %name, source = %source, target = %target)
        } else {
            info_span!("command", name = %name, source = %source)
        }
    }
}
