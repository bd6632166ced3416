use std::sync::atomic::{AtomicU64, Ordering};

use bytes::Bytes;
use rtsp_formats::{request::RtspRequest, response::RtspResponse};

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque, non-owning back-reference from a [`Chunk`] to the listener that
/// produced it. Never borrows or owns the listener itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub(crate) fn next() -> Self {
        Self(NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone)]
pub struct RequestChunk {
    pub request: RtspRequest,
    pub cseq: Option<u32>,
    pub source: ListenerId,
}

#[derive(Debug, Clone)]
pub struct ResponseChunk {
    pub response: RtspResponse,
    pub cseq: Option<u32>,
    pub original_request: Option<RtspRequest>,
    pub source: ListenerId,
}

#[derive(Debug, Clone)]
pub struct DataChunk {
    pub channel: u8,
    pub payload: Bytes,
    pub source: ListenerId,
}

/// One unit produced by a single call to `read_one_chunk`: either side of
/// the RTSP text protocol, or an interleaved binary frame.
#[derive(Debug, Clone)]
pub enum Chunk {
    Request(RequestChunk),
    Response(ResponseChunk),
    Data(DataChunk),
}

impl Chunk {
    pub fn source(&self) -> ListenerId {
        match self {
            Chunk::Request(c) => c.source,
            Chunk::Response(c) => c.source,
            Chunk::Data(c) => c.source,
        }
    }
}

/// A message a caller hands to [`crate::RtspListener::send_message`] — either
/// side of the text protocol, undifferentiated at the send boundary.
#[derive(Debug, Clone)]
pub enum RtspRequestOrResponse {
    Request(RtspRequest),
    Response(RtspResponse),
}

impl From<RtspRequest> for RtspRequestOrResponse {
    fn from(request: RtspRequest) -> Self {
        Self::Request(request)
    }
}

impl From<RtspResponse> for RtspRequestOrResponse {
    fn from(response: RtspResponse) -> Self {
        Self::Response(response)
    }
}
