//! Test server management.
//!
//! Runs a gateway inside the test's runtime on an ephemeral port.

use slchatd::config::Config;
use slchatd::network::Gateway;
use std::net::SocketAddr;
use tokio::task::JoinHandle;

/// Server name used in every test config.
pub const SERVER_NAME: &str = "test.server";

/// A test server instance. Stopped when dropped.
pub struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<anyhow::Result<()>>,
}

impl TestServer {
    /// Spawn a server with default limits.
    pub async fn spawn() -> anyhow::Result<Self> {
        Self::spawn_with("").await
    }

    /// Spawn a server, appending `extra` TOML to the minimal config.
    pub async fn spawn_with(extra: &str) -> anyhow::Result<Self> {
        let config: Config = format!(
            r#"
[server]
name = "{SERVER_NAME}"

[listen]
address = "127.0.0.1:0"
{extra}
"#
        )
        .parse()?;

        let gateway = Gateway::bind(&config).await?;
        let addr = gateway.local_addr()?;
        let handle = tokio::spawn(gateway.run());

        Ok(Self { addr, handle })
    }

    /// Get the server address.
    pub fn address(&self) -> String {
        self.addr.to_string()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
