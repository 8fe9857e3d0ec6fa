//! Connection - one task per accepted client.
//!
//! The task registers with the dispatcher, then multiplexes two streams with
//! `tokio::select!`: inbound lines from the socket are forwarded to the
//! dispatcher, outbound lines from the dispatcher are written to the socket.
//! On EOF, I/O error or an over-long line the connection deregisters.

use super::dispatcher::DispatchEvent;
use crate::config::LimitsConfig;
use futures_util::{SinkExt, StreamExt};
use slchat_proto::UserId;
use std::net::SocketAddr;
use tokio::net::TcpStream;
use tokio::sync::{mpsc, oneshot};
use tokio_util::codec::{FramedRead, FramedWrite, LinesCodec};
use tracing::{debug, info};

/// A client connection handler.
pub struct Connection {
    id: UserId,
    addr: SocketAddr,
    stream: TcpStream,
    dispatcher: mpsc::Sender<DispatchEvent>,
    max_line_length: usize,
    outbound_queue: usize,
}

impl Connection {
    pub fn new(
        id: UserId,
        stream: TcpStream,
        addr: SocketAddr,
        dispatcher: mpsc::Sender<DispatchEvent>,
        limits: &LimitsConfig,
    ) -> Self {
        Self {
            id,
            addr,
            stream,
            dispatcher,
            max_line_length: limits.max_line_length,
            outbound_queue: limits.outbound_queue,
        }
    }

    /// Run the connection until the client goes away.
    pub async fn run(self) -> anyhow::Result<()> {
        let id = self.id;
        let (read_half, write_half) = self.stream.into_split();
        let mut reader = FramedRead::new(
            read_half,
            LinesCodec::new_with_max_length(self.max_line_length),
        );
        let mut writer = FramedWrite::new(write_half, LinesCodec::new());

        let (outbound, mut outbound_rx) = mpsc::channel::<String>(self.outbound_queue);
        let (reply_tx, reply_rx) = oneshot::channel();
        self.dispatcher
            .send(DispatchEvent::Connect {
                id,
                outbound,
                reply_tx,
            })
            .await
            .map_err(|_| anyhow::anyhow!("dispatcher is not running"))?;
        let nick = reply_rx.await?;
        info!(nick = %nick, addr = %self.addr, "Client registered");

        let result = loop {
            tokio::select! {
                frame = reader.next() => match frame {
                    Some(Ok(line)) => {
                        if self.dispatcher.send(DispatchEvent::Line { id, line }).await.is_err() {
                            break Ok(());
                        }
                    }
                    Some(Err(e)) => break Err(anyhow::Error::from(e)),
                    None => {
                        debug!("Client closed the connection");
                        break Ok(());
                    }
                },
                Some(line) = outbound_rx.recv() => {
                    if let Err(e) = writer.send(line).await {
                        break Err(e.into());
                    }
                }
            }
        };

        if self
            .dispatcher
            .send(DispatchEvent::Disconnect { id })
            .await
            .is_err()
        {
            debug!("Dispatcher stopped before disconnect");
        }
        result
    }
}
