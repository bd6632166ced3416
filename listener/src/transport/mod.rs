pub mod tcp;
#[cfg(feature = "tls")]
pub mod tls;

use unified_io::UnifiedIO;

use crate::errors::TransportError;

pub type BoxedStream = Box<dyn UnifiedIO + Send>;

/// Capability a listener needs from whatever carries its bytes: connect
/// status, a boxed bidirectional stream, and a reconnect/close lifecycle.
/// The listener engine is generic over this trait and never touches socket
/// semantics directly.
pub trait Transport: Send {
    fn connected(&self) -> bool;
    fn remote_address(&self) -> String;
    fn get_stream(
        &mut self,
    ) -> impl Future<Output = Result<BoxedStream, TransportError>> + Send;
    fn reconnect(&mut self) -> impl Future<Output = Result<(), TransportError>> + Send;
    fn close(&mut self) -> impl Future<Output = ()> + Send;
}

pub use tcp::TcpTransport;
#[cfg(feature = "tls")]
pub use tls::TlsTransport;
