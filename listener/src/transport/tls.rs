use tokio::net::TcpStream;
use tokio_native_tls::TlsConnector;
use unified_io::tls::TlsIO;

use crate::errors::TransportError;

use super::{BoxedStream, Transport};

/// `native-tls`-over-TCP transport (RTSPS), grounded on the same
/// connect-then-upgrade shape as plain TCP.
#[derive(Debug)]
pub struct TlsTransport {
    host: String,
    port: u16,
    accept_invalid_certs: bool,
    stream: Option<tokio_native_tls::TlsStream<TcpStream>>,
    connected: bool,
}

impl TlsTransport {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            accept_invalid_certs: false,
            stream: None,
            connected: false,
        }
    }

    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }
}

impl Transport for TlsTransport {
    fn connected(&self) -> bool {
        self.connected
    }

    fn remote_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    async fn get_stream(&mut self) -> Result<BoxedStream, TransportError> {
        if self.stream.is_none() {
            self.reconnect().await?;
        }
        let stream = self.stream.take().ok_or(TransportError::NotConnected)?;
        Ok(Box::new(TlsIO::new(stream)))
    }

    async fn reconnect(&mut self) -> Result<(), TransportError> {
        tracing::debug!("tls transport connecting to {}:{}", self.host, self.port);
        let tcp_stream = TcpStream::connect((self.host.as_str(), self.port)).await?;

        let mut builder = native_tls::TlsConnector::builder();
        if self.accept_invalid_certs {
            builder.danger_accept_invalid_certs(true);
        }
        let connector = TlsConnector::from(builder.build()?);
        let tls_stream = connector.connect(&self.host, tcp_stream).await.map_err(|err| {
            TransportError::Io(std::io::Error::other(err.to_string()))
        })?;

        self.connected = true;
        self.stream = Some(tls_stream);
        Ok(())
    }

    async fn close(&mut self) {
        self.stream = None;
        self.connected = false;
    }
}
