use std::io;

use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum RtspMessageError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("format error: {0}")]
    FormatError(#[from] std::fmt::Error),
    #[error("unknown method: {0:?}")]
    UnknownMethod(Option<String>),
    #[error("unknown uri: {0:?}")]
    UnknownUri(Option<Url>),
    #[error("unknown header: {0:?}")]
    UnknownHeader(Option<String>),
    #[error("unknown status code: {0:?}")]
    UnknownStatusCode(Option<u16>),
    #[error("unknown rtsp version: {0:?}")]
    UnknownRtspVersion(Option<String>),
    #[error("missing Content-Type header for a message with a body")]
    MissingContentType,
    #[error("invalid message format: {0}")]
    InvalidRtspMessageFormat(String),
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("invalid interleaved $ sign: {0}")]
    InvalidInterleavedSign(u8),
    #[error("interleaved payload too large: {0} bytes")]
    InvalidInterleavedDataLength(usize),
    #[error("line exceeds maximum length of {0} bytes")]
    LineTooLong(usize),
}

pub type RtspMessageResult<T> = Result<T, RtspMessageError>;
