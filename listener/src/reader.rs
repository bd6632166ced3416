use std::io::Cursor;

use bytes::Buf;
use rtsp_formats::{
    consts::common::{DOLLAR_SIGN, LF},
    errors::RtspMessageError,
    interleaved::RtspInterleavedPacket,
    request::RtspRequest,
    response::RtspResponse,
};
use tokio::io::{AsyncRead, AsyncReadExt};
use utils::traits::reader::TryReadFrom;

use crate::chunk::{Chunk, DataChunk, ListenerId, RequestChunk, ResponseChunk};

/// Whether the blank line terminating the header block (`\n\r?\n`) has
/// arrived anywhere in `buf`. Once it has, the rest of the buffer is body
/// bytes governed by `Content-Length`, not line-oriented input.
fn header_block_terminated(buf: &[u8]) -> bool {
    let mut i = 0;
    while i < buf.len() {
        if buf[i] == LF {
            let mut j = i + 1;
            if j < buf.len() && buf[j] == b'\r' {
                j += 1;
            }
            if j < buf.len() && buf[j] == LF {
                return true;
            }
        }
        i += 1;
    }
    false
}

/// Reads one [`Chunk`] at a time off an `AsyncRead` stream, discriminating
/// text RTSP messages from `$`-prefixed interleaved binary frames at each
/// frame boundary (the `NewCommand` state of the framing state machine).
///
/// Bytes that have arrived but do not yet form a complete chunk are kept in
/// an internal buffer across calls; a short read (EOF before a chunk
/// completes) discards that partial buffer rather than dispatching it.
pub struct FrameReader<R> {
    inner: R,
    buffer: Vec<u8>,
    max_line_length: usize,
}

impl<R: AsyncRead + Unpin> FrameReader<R> {
    pub fn new(inner: R, max_line_length: usize) -> Self {
        Self {
            inner,
            buffer: Vec::new(),
            max_line_length,
        }
    }

    /// Reads exactly one chunk, or `Ok(None)` on a clean/partial EOF.
    pub async fn read_one_chunk(
        &mut self,
        source: ListenerId,
    ) -> Result<Option<Chunk>, RtspMessageError> {
        loop {
            if let Some(chunk) = self.try_parse_buffered(source)? {
                return Ok(Some(chunk));
            }

            if self.exceeds_line_cap() {
                return Err(RtspMessageError::LineTooLong(self.max_line_length));
            }

            let mut tmp = [0u8; 4096];
            let n = self.inner.read(&mut tmp).await?;
            if n == 0 {
                // EOF; anything still buffered is an incomplete chunk and is
                // discarded rather than dispatched.
                self.buffer.clear();
                return Ok(None);
            }
            self.buffer.extend_from_slice(&tmp[..n]);
        }
    }

    /// The `max_line_length` cap bounds a single start-line/header line, not
    /// a message's total size — a body or interleaved payload is bounded by
    /// `Content-Length`/the 16-bit length field instead, and may legitimately
    /// arrive in many small reads that together dwarf one line. So this only
    /// inspects lines that precede the blank line terminating the header
    /// block, and never applies to an interleaved frame (whose 3-byte header
    /// and payload aren't line-oriented at all).
    fn exceeds_line_cap(&self) -> bool {
        if self.buffer.is_empty() || self.buffer[0] == DOLLAR_SIGN {
            return false;
        }
        if header_block_terminated(&self.buffer) {
            return false;
        }
        let mut line_start = 0;
        for (i, &byte) in self.buffer.iter().enumerate() {
            if byte == LF {
                if i - line_start > self.max_line_length {
                    return true;
                }
                line_start = i + 1;
            }
        }
        self.buffer.len() - line_start > self.max_line_length
    }

    fn try_parse_buffered(&mut self, source: ListenerId) -> Result<Option<Chunk>, RtspMessageError> {
        let mut cursor = Cursor::new(&self.buffer);
        if !cursor.has_remaining() {
            return Ok(None);
        }

        let chunk = if self.buffer[0] == DOLLAR_SIGN {
            match RtspInterleavedPacket::try_read_from(&mut cursor)? {
                Some(packet) => Some(Chunk::Data(DataChunk {
                    channel: packet.channel_id,
                    payload: packet.payload,
                    source,
                })),
                None => None,
            }
        } else {
            self.try_parse_message(&mut cursor, source)?
        };

        if chunk.is_some() {
            let consumed = cursor.position() as usize;
            self.buffer.drain(..consumed);
        }
        Ok(chunk)
    }

    fn try_parse_message(
        &self,
        cursor: &mut Cursor<&Vec<u8>>,
        source: ListenerId,
    ) -> Result<Option<Chunk>, RtspMessageError> {
        let start = cursor.position();
        match RtspRequest::try_read_from(cursor) {
            Ok(Some(request)) => {
                let cseq = request.cseq();
                return Ok(Some(Chunk::Request(RequestChunk {
                    request,
                    cseq,
                    source,
                })));
            }
            Ok(None) => return Ok(None),
            Err(RtspMessageError::InvalidRtspMessageFormat(_)) => {
                cursor.set_position(start);
            }
            Err(err) => return Err(err),
        }

        match RtspResponse::try_read_from(cursor)? {
            Some(response) => {
                let cseq = response.cseq();
                Ok(Some(Chunk::Response(ResponseChunk {
                    response,
                    cseq,
                    original_request: None,
                    source,
                })))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::duplex;

    use crate::chunk::ListenerId;

    use super::FrameReader;

    fn id() -> ListenerId {
        ListenerId::next()
    }

    #[tokio::test]
    async fn reads_a_request_then_an_interleaved_frame() {
        let (mut client, server) = duplex(4096);
        let mut reader = FrameReader::new(server, 8 * 1024);

        tokio::io::AsyncWriteExt::write_all(
            &mut client,
            b"OPTIONS rtsp://example.com RTSP/2.0\r\nCSeq: 1\r\n\r\n",
        )
        .await
        .unwrap();

        let chunk = reader.read_one_chunk(id()).await.unwrap().unwrap();
        match chunk {
            crate::chunk::Chunk::Request(req) => assert_eq!(req.cseq, Some(1)),
            other => panic!("expected a request, got {other:?}"),
        }

        tokio::io::AsyncWriteExt::write_all(&mut client, &[0x24, 0x00, 0x00, 0x03, 1, 2, 3])
            .await
            .unwrap();
        let chunk = reader.read_one_chunk(id()).await.unwrap().unwrap();
        match chunk {
            crate::chunk::Chunk::Data(data) => {
                assert_eq!(data.channel, 0);
                assert_eq!(&data.payload[..], &[1, 2, 3]);
            }
            other => panic!("expected data, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn returns_none_on_clean_eof() {
        let (client, server) = duplex(16);
        drop(client);
        let mut reader = FrameReader::new(server, 8 * 1024);
        assert!(reader.read_one_chunk(id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn discards_a_partial_body_on_eof() {
        let (mut client, server) = duplex(4096);
        let mut reader = FrameReader::new(server, 8 * 1024);
        tokio::io::AsyncWriteExt::write_all(
            &mut client,
            b"GET_PARAMETER rtsp://example.com RTSP/2.0\r\nCSeq: 2\r\nContent-Type: text/parameters\r\nContent-Length: 20\r\n\r\nshort",
        )
        .await
        .unwrap();
        drop(client);
        assert!(reader.read_one_chunk(id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn a_body_larger_than_the_line_cap_spanning_many_reads_is_not_rejected() {
        let (mut client, server) = duplex(32 * 1024);
        let mut reader = FrameReader::new(server, 8 * 1024);
        let body = vec![b'a'; 9000];
        let header = format!(
            "ANNOUNCE rtsp://example.com RTSP/2.0\r\nCSeq: 3\r\nContent-Type: application/sdp\r\nContent-Length: {}\r\n\r\n",
            body.len()
        );
        tokio::io::AsyncWriteExt::write_all(&mut client, header.as_bytes())
            .await
            .unwrap();
        tokio::io::AsyncWriteExt::write_all(&mut client, &body)
            .await
            .unwrap();

        let chunk = reader.read_one_chunk(id()).await.unwrap().unwrap();
        match chunk {
            crate::chunk::Chunk::Request(req) => {
                assert_eq!(req.cseq, Some(3));
                assert_eq!(req.request.body().map(String::len), Some(9000));
            }
            other => panic!("expected a request, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn rejects_a_line_past_the_configured_cap() {
        let (mut client, server) = duplex(4096);
        let mut reader = FrameReader::new(server, 16);
        tokio::io::AsyncWriteExt::write_all(&mut client, b"OPTIONS rtsp://this-uri-is-way-too-long-for-the-configured-cap RTSP/2.0\r\n")
            .await
            .unwrap();
        let result = reader.read_one_chunk(id()).await;
        assert!(result.is_err());
    }
}
