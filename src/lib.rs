use std::{
    io::Write,
    net::{SocketAddr, TcpStream},
    time::Duration,
};

use anyhow::Context;
use bytes::BytesMut;

/// Port the broker listens on. Not negotiable on the wire.
pub const BROKER_PORT: u16 = 9000;

/// Payload sent when the caller does not override it.
pub const DEFAULT_PAYLOAD: &str = "*,*,red";

/// Pause between payload sends.
pub const SEND_INTERVAL: Duration = Duration::from_secs(5);

/// A registered connection to the broker.
///
/// The protocol is line-delimited and strictly one-directional: two
/// registration lines up front (application name, then topic), payload lines
/// after that. Nothing is ever read back. Dropping the publisher closes the
/// socket; there is no other teardown.
#[derive(Debug)]
pub struct Publisher {
    stream: TcpStream,
    write: BytesMut,
}

impl Publisher {
    /// Connects to the broker and sends the registration lines.
    pub fn register(addr: SocketAddr, app_name: &str, topic: &str) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(addr)
            .with_context(|| format!("failed to connect to IPC server at {addr}"))?;

        let mut publisher = Publisher {
            stream,
            write: BytesMut::with_capacity(256),
        };
        publisher
            .send_line(app_name)
            .context("failed to send application name")?;
        publisher
            .send_line(topic)
            .context("failed to send topic")?;

        Ok(publisher)
    }

    /// Sends one newline-terminated payload line.
    pub fn publish(&mut self, payload: &str) -> anyhow::Result<()> {
        self.send_line(payload).context("failed to send payload")
    }

    fn send_line(&mut self, line: &str) -> anyhow::Result<()> {
        self.write.extend_from_slice(line.as_bytes());
        self.write.extend_from_slice(b"\n");
        self.stream.write_all(&self.write[..])?;
        self.write.clear();
        Ok(())
    }
}
