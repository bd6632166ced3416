use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::io::{AsyncRead, AsyncWrite, ReadBuf};
use tokio::net::TcpStream;
use tokio_native_tls::TlsStream;

use crate::UnifiedIO;

#[derive(Debug)]
pub struct TlsIO {
    inner: TlsStream<TcpStream>,
}

impl TlsIO {
    pub fn new(inner: TlsStream<TcpStream>) -> Self {
        Self { inner }
    }

    fn tcp(&self) -> &TcpStream {
        self.inner.get_ref().get_ref().get_ref()
    }
}

impl UnifiedIO for TlsIO {
    fn get_underlying_io(&self) -> crate::UnderlyingIo {
        crate::UnderlyingIo::Tls {
            local_addr: self.tcp().local_addr().ok(),
            peer_addr: self.tcp().peer_addr().ok(),
        }
    }
}

impl AsyncRead for TlsIO {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<std::io::Result<()>> {
        Pin::new(&mut self.get_mut().inner).poll_read(cx, buf)
    }
}

impl AsyncWrite for TlsIO {
    fn poll_write(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<Result<usize, std::io::Error>> {
        Pin::new(&mut self.get_mut().inner).poll_write(cx, buf)
    }

    fn poll_flush(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Result<(), std::io::Error>> {
        Pin::new(&mut self.get_mut().inner).poll_flush(cx)
    }

    fn poll_shutdown(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Result<(), std::io::Error>> {
        Pin::new(&mut self.get_mut().inner).poll_shutdown(cx)
    }
}
