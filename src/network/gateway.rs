//! Gateway - TCP listener that accepts incoming connections.
//!
//! The Gateway binds the configured address, starts the dispatcher and
//! spawns a [`Connection`] task for each accepted client.

use super::dispatcher::{DispatchEvent, Dispatcher};
use crate::config::{Config, LimitsConfig};
use crate::network::Connection;
use crate::state::IdGenerator;
use crate::telemetry::spans;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tracing::{Instrument, error, info, instrument, warn};

/// The Gateway accepts incoming TCP connections and spawns handlers.
pub struct Gateway {
    listener: TcpListener,
    dispatcher: mpsc::Sender<DispatchEvent>,
    ids: IdGenerator,
    limits: LimitsConfig,
}

impl Gateway {
    /// Bind the listener and start the dispatcher.
    pub async fn bind(config: &Config) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(config.listen.address).await?;
        info!(address = %listener.local_addr()?, "Listener bound");

        let dispatcher = Dispatcher::spawn(
            config.server.name.clone(),
            config.limits.dispatcher_queue,
        );

        Ok(Self {
            listener,
            dispatcher,
            ids: IdGenerator::new(),
            limits: config.limits.clone(),
        })
    }

    /// The bound address; differs from the configured one when port 0 was
    /// requested.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Run the gateway, accepting connections forever.
    #[instrument(skip(self), name = "gateway")]
    pub async fn run(self) -> anyhow::Result<()> {
        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    let id = self.ids.next();
                    info!(%addr, id, "Connection accepted");

                    let connection = Connection::new(
                        id,
                        stream,
                        addr,
                        self.dispatcher.clone(),
                        &self.limits,
                    );
                    tokio::spawn(
                        async move {
                            if let Err(e) = connection.run().await {
                                warn!(error = %e, "Connection error");
                            }
                            info!("Connection closed");
                        }
                        .instrument(spans::connection(id, addr)),
                    );
                }
                Err(e) => {
                    error!(error = %e, "Failed to accept connection");
                }
            }
        }
    }
}
