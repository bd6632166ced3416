use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "tls")]
    #[error("tls error: {0}")]
    Tls(#[from] native_tls::Error),
    #[error("transport is disposed")]
    Disposed,
    #[error("not connected")]
    NotConnected,
}

#[derive(Debug, Error)]
pub enum ListenerError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("rtsp message error: {0}")]
    RtspMessage(#[from] rtsp_formats::errors::RtspMessageError),
    #[error("interleaved payload too large: {0} bytes (max 65535)")]
    PayloadTooLarge(usize),
    #[error("invalid listener state for this operation: {0}")]
    InvalidState(&'static str),
}

pub type TransportResult<T> = Result<T, TransportError>;
pub type ListenerResult<T> = Result<T, ListenerError>;
