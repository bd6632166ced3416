use rtsp_formats::{
    consts::common::MAX_INTERLEAVED_PAYLOAD_LEN, interleaved::RtspInterleavedPacket,
    request::RtspRequest, response::RtspResponse,
};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use utils::traits::{dynamic_sized_packet::DynamicSizedPacket, writer::WriteTo};

use crate::errors::ListenerError;

/// Serializes outbound RTSP messages and interleaved frames, one write call
/// per chunk. Concurrent callers are serialized through a mutex guarding
/// the stream's write half.
pub struct FrameWriter<W> {
    inner: tokio::sync::Mutex<W>,
}

impl<W: AsyncWrite + Unpin> FrameWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner: tokio::sync::Mutex::new(inner),
        }
    }

    pub async fn write_request(&self, request: &RtspRequest) -> Result<(), ListenerError> {
        let bytes = format!("{}", request).into_bytes();
        let mut guard = self.inner.lock().await;
        guard.write_all(&bytes).await.map_err(|err| {
            ListenerError::Transport(crate::errors::TransportError::Io(err))
        })?;
        guard
            .flush()
            .await
            .map_err(|err| ListenerError::Transport(crate::errors::TransportError::Io(err)))
    }

    pub async fn write_response(&self, response: &RtspResponse) -> Result<(), ListenerError> {
        let bytes = format!("{}", response).into_bytes();
        let mut guard = self.inner.lock().await;
        guard.write_all(&bytes).await.map_err(|err| {
            ListenerError::Transport(crate::errors::TransportError::Io(err))
        })?;
        guard
            .flush()
            .await
            .map_err(|err| ListenerError::Transport(crate::errors::TransportError::Io(err)))
    }

    pub async fn write_data(&self, channel: u8, payload: &[u8]) -> Result<(), ListenerError> {
        if payload.len() > MAX_INTERLEAVED_PAYLOAD_LEN {
            return Err(ListenerError::PayloadTooLarge(payload.len()));
        }

        let packet = RtspInterleavedPacket::builder()
            .channel(channel)
            .payload(payload)
            .build();
        let mut buf = Vec::with_capacity(packet.get_packet_bytes_count());
        packet
            .write_to(&mut buf)
            .map_err(ListenerError::RtspMessage)?;

        let mut guard = self.inner.lock().await;
        guard
            .write_all(&buf)
            .await
            .map_err(|err| ListenerError::Transport(crate::errors::TransportError::Io(err)))?;
        guard
            .flush()
            .await
            .map_err(|err| ListenerError::Transport(crate::errors::TransportError::Io(err)))
    }
}
