use std::net::SocketAddr;

use tokio::io::{AsyncRead, AsyncWrite};

pub mod errors;
pub mod tcp;
#[cfg(feature = "tls")]
pub mod tls;

pub enum UnderlyingIo {
    Tcp {
        local_addr: Option<SocketAddr>,
        peer_addr: Option<SocketAddr>,
    },
    #[cfg(feature = "tls")]
    Tls {
        local_addr: Option<SocketAddr>,
        peer_addr: Option<SocketAddr>,
    },
}

/// Object-safe capability a listener needs from its byte stream: an
/// `AsyncRead + AsyncWrite` pipe plus enough introspection to log which kind
/// of transport backs it.
pub trait UnifiedIO: AsyncRead + AsyncWrite + Send + Unpin {
    fn get_underlying_io(&self) -> UnderlyingIo;
}
