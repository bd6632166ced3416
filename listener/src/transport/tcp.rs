use tokio::net::TcpStream;
use unified_io::tcp::TcpIO;

use crate::errors::TransportError;

use super::{BoxedStream, Transport};

/// Plain-TCP transport: connects lazily, hands the listener a fresh
/// [`TcpIO`] stream on every `get_stream`/`reconnect` cycle.
#[derive(Debug)]
pub struct TcpTransport {
    addr: String,
    stream: Option<TcpStream>,
    connected: bool,
}

impl TcpTransport {
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            stream: None,
            connected: false,
        }
    }
}

impl Transport for TcpTransport {
    fn connected(&self) -> bool {
        self.connected
    }

    fn remote_address(&self) -> String {
        self.addr.clone()
    }

    async fn get_stream(&mut self) -> Result<BoxedStream, TransportError> {
        if self.stream.is_none() {
            self.reconnect().await?;
        }
        let stream = self.stream.take().ok_or(TransportError::NotConnected)?;
        Ok(Box::new(TcpIO::new(stream)))
    }

    async fn reconnect(&mut self) -> Result<(), TransportError> {
        tracing::debug!("tcp transport connecting to {}", self.addr);
        let stream = TcpStream::connect(&self.addr).await?;
        self.connected = true;
        self.stream = Some(stream);
        Ok(())
    }

    async fn close(&mut self) {
        self.stream = None;
        self.connected = false;
    }
}
