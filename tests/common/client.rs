//! Test chat client.
//!
//! Sends raw lines and asserts on the lines the server writes back.

use super::server::SERVER_NAME;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::time::timeout;

/// A test client.
pub struct TestClient {
    reader: BufReader<OwnedReadHalf>,
    writer: BufWriter<OwnedWriteHalf>,
    nick: String,
}

impl TestClient {
    /// Connect and wait for the CONNECTED line carrying the assigned nickname.
    pub async fn connect(address: &str) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(address).await?;
        let (read_half, write_half) = stream.into_split();

        let mut client = Self {
            reader: BufReader::new(read_half),
            writer: BufWriter::new(write_half),
            nick: String::new(),
        };

        let greeting = client.recv().await?;
        let prefix = format!(":{SERVER_NAME} CONNECTED ");
        let Some(nick) = greeting.strip_prefix(&prefix) else {
            anyhow::bail!("Expected CONNECTED, got {greeting:?}");
        };
        client.nick = nick.to_string();
        Ok(client)
    }

    /// The nickname assigned at connect time.
    pub fn nick(&self) -> &str {
        &self.nick
    }

    /// Send a raw line.
    pub async fn send_raw(&mut self, line: &str) -> anyhow::Result<()> {
        self.writer.write_all(line.as_bytes()).await?;
        if !line.ends_with('\n') {
            self.writer.write_all(b"\r\n").await?;
        }
        self.writer.flush().await?;
        Ok(())
    }

    /// Receive a single line from the server.
    pub async fn recv(&mut self) -> anyhow::Result<String> {
        self.recv_timeout(Duration::from_secs(5)).await
    }

    /// Receive a line with a timeout. EOF is an error.
    pub async fn recv_timeout(&mut self, dur: Duration) -> anyhow::Result<String> {
        let mut line = String::new();
        let n = timeout(dur, self.reader.read_line(&mut line)).await??;
        if n == 0 {
            anyhow::bail!("Connection closed by server");
        }
        Ok(line.trim_end().to_string())
    }

    /// Receive lines until the predicate returns true.
    #[allow(dead_code)]
    pub async fn recv_until<F>(&mut self, mut predicate: F) -> anyhow::Result<Vec<String>>
    where
        F: FnMut(&str) -> bool,
    {
        let mut lines = Vec::new();
        loop {
            let line = self.recv().await?;
            let done = predicate(&line);
            lines.push(line);
            if done {
                break;
            }
        }
        Ok(lines)
    }

    /// Assert nothing arrives within a short window.
    #[allow(dead_code)]
    pub async fn expect_silence(&mut self) {
        if let Ok(line) = self.recv_timeout(Duration::from_millis(200)).await {
            panic!("{} received unexpected line: {line}", self.nick);
        }
    }
}
