pub mod chunk;
pub mod config;
pub mod correlator;
pub mod engine;
pub mod errors;
pub mod reader;
pub mod transport;
pub mod writer;

pub use chunk::{Chunk, DataChunk, ListenerId, RequestChunk, ResponseChunk, RtspRequestOrResponse};
pub use config::ListenerConfig;
pub use engine::{ListenerState, RtspListener};
pub use errors::{ListenerError, ListenerResult, TransportError, TransportResult};
pub use transport::{BoxedStream, Transport, TcpTransport};
#[cfg(feature = "tls")]
pub use transport::TlsTransport;
