use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use bytes::Bytes;
use rtsp_formats::consts::common::MAX_INTERLEAVED_PAYLOAD_LEN;
use tokio::sync::{Mutex, broadcast};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::{
    chunk::{Chunk, DataChunk, ListenerId, RtspRequestOrResponse},
    config::ListenerConfig,
    correlator::Correlator,
    errors::{ListenerError, ListenerResult},
    reader::FrameReader,
    transport::{BoxedStream, Transport},
    writer::FrameWriter,
};

/// Mirrors `spec.md` §3's listener state machine. `Idle → Running` on
/// [`RtspListener::start`]; `Running → Stopping` on [`RtspListener::stop`] or
/// a fatal read error; `Stopping → Stopped` once the read task exits;
/// `Stopped → Running` via [`RtspListener::reconnect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerState {
    Idle,
    Running,
    Stopping,
    Stopped,
}

const MESSAGE_CHANNEL_CAPACITY: usize = 256;
const DATA_CHANNEL_CAPACITY: usize = 256;

type BoxedWriter = FrameWriter<tokio::io::WriteHalf<BoxedStream>>;

struct ActiveConnection {
    writer: Arc<BoxedWriter>,
    cancel: CancellationToken,
    read_task: JoinHandle<()>,
}

struct Inner<T: Transport> {
    id: ListenerId,
    transport: Mutex<T>,
    config: ListenerConfig,
    state: Mutex<ListenerState>,
    auto_reconnect: AtomicBool,
    correlator: Correlator,
    connection: Mutex<Option<ActiveConnection>>,
    message_tx: broadcast::Sender<Chunk>,
    data_tx: broadcast::Sender<DataChunk>,
}

/// Pairs one [`Transport`] with one long-running read task, dispatching the
/// chunks it produces to subscribers and correlating sent requests with the
/// responses that answer them.
///
/// Cheaply cloneable: clones share the same connection, correlator, and
/// subscriber channels (an `Arc<Inner<T>>` underneath), matching the
/// teacher's `Arc`-wrapped shared-session idiom.
pub struct RtspListener<T: Transport> {
    inner: Arc<Inner<T>>,
}

impl<T: Transport> Clone for RtspListener<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Transport + 'static> RtspListener<T> {
    pub fn new(transport: T, config: ListenerConfig) -> Self {
        let auto_reconnect = config.auto_reconnect;
        let (message_tx, _) = broadcast::channel(MESSAGE_CHANNEL_CAPACITY);
        let (data_tx, _) = broadcast::channel(DATA_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(Inner {
                id: ListenerId::next(),
                transport: Mutex::new(transport),
                config,
                state: Mutex::new(ListenerState::Idle),
                auto_reconnect: AtomicBool::new(auto_reconnect),
                correlator: Correlator::new(),
                connection: Mutex::new(None),
                message_tx,
                data_tx,
            }),
        }
    }

    pub fn id(&self) -> ListenerId {
        self.inner.id
    }

    pub async fn remote_address(&self) -> String {
        self.inner.transport.lock().await.remote_address()
    }

    pub async fn state(&self) -> ListenerState {
        *self.inner.state.lock().await
    }

    pub fn set_auto_reconnect(&self, value: bool) {
        self.inner.auto_reconnect.store(value, Ordering::SeqCst);
    }

    pub fn auto_reconnect(&self) -> bool {
        self.inner.auto_reconnect.load(Ordering::SeqCst)
    }

    pub fn subscribe_messages(&self) -> broadcast::Receiver<Chunk> {
        self.inner.message_tx.subscribe()
    }

    pub fn subscribe_data(&self) -> broadcast::Receiver<DataChunk> {
        self.inner.data_tx.subscribe()
    }

    /// `Idle → Running`: acquires a stream from the transport and spawns the
    /// read task. Returns `InvalidState` if the listener is not `Idle`.
    pub async fn start(&self) -> ListenerResult<()> {
        {
            let state = self.inner.state.lock().await;
            if *state != ListenerState::Idle {
                return Err(ListenerError::InvalidState(
                    "start requires the listener to be Idle",
                ));
            }
        }
        self.establish_connection().await
    }

    /// Cancels the read task and force-closes the transport. Does not wait
    /// for the read task to exit; use [`RtspListener::dispose`] to block.
    pub async fn stop(&self) {
        {
            let mut state = self.inner.state.lock().await;
            if *state == ListenerState::Running {
                *state = ListenerState::Stopping;
            }
        }
        if let Some(conn) = self.inner.connection.lock().await.as_ref() {
            conn.cancel.cancel();
        }
        self.inner.transport.lock().await.close().await;
    }

    /// No-op if already connected. Otherwise waits for the current read task
    /// to finish, disposes the old stream, redials via `Transport::reconnect`,
    /// and restarts the read task — the outstanding-request table and
    /// sequence counter survive untouched.
    pub async fn reconnect(&self) -> ListenerResult<()> {
        if self.inner.transport.lock().await.connected() {
            return Ok(());
        }
        if let Some(conn) = self.inner.connection.lock().await.take() {
            conn.cancel.cancel();
            let _ = conn.read_task.await;
        }
        self.inner.transport.lock().await.reconnect().await?;
        self.establish_connection().await
    }

    /// `stop()` followed by waiting for the read task to fully exit and
    /// releasing the stream.
    pub async fn dispose(&self) {
        self.stop().await;
        let conn = self.inner.connection.lock().await.take();
        if let Some(conn) = conn {
            let _ = conn.read_task.await;
        }
    }

    pub async fn send_message(&self, message: RtspRequestOrResponse) -> ListenerResult<bool> {
        if !self.ensure_connected().await? {
            return Ok(false);
        }
        let writer = self.current_writer().await.ok_or(ListenerError::InvalidState(
            "send_message requires the listener to be started",
        ))?;
        match message {
            RtspRequestOrResponse::Request(request) => {
                let (_, tracked) = self.inner.correlator.track(&request).await;
                writer.write_request(&tracked).await?;
            }
            RtspRequestOrResponse::Response(response) => {
                writer.write_response(&response).await?;
            }
        }
        Ok(true)
    }

    pub async fn send_data(&self, channel: u8, payload: Bytes) -> ListenerResult<()> {
        if payload.len() > MAX_INTERLEAVED_PAYLOAD_LEN {
            return Err(ListenerError::PayloadTooLarge(payload.len()));
        }
        if !self.ensure_connected().await? {
            return Err(ListenerError::InvalidState(
                "send_data requires a connected transport",
            ));
        }
        let writer = self.current_writer().await.ok_or(ListenerError::InvalidState(
            "send_data requires the listener to be started",
        ))?;
        writer.write_data(channel, &payload).await
    }

    async fn ensure_connected(&self) -> ListenerResult<bool> {
        if self.inner.transport.lock().await.connected() {
            return Ok(true);
        }
        if !self.auto_reconnect() {
            return Ok(false);
        }
        Ok(self.reconnect().await.is_ok())
    }

    async fn current_writer(&self) -> Option<Arc<BoxedWriter>> {
        self.inner
            .connection
            .lock()
            .await
            .as_ref()
            .map(|conn| conn.writer.clone())
    }

    async fn establish_connection(&self) -> ListenerResult<()> {
        let stream = self.inner.transport.lock().await.get_stream().await?;
        let (read_half, write_half) = tokio::io::split(stream);
        let writer = Arc::new(FrameWriter::new(write_half));
        let reader = FrameReader::new(read_half, self.inner.config.max_line_length);
        let cancel = CancellationToken::new();

        let inner = self.inner.clone();
        let task_cancel = cancel.clone();
        let read_task = tokio::spawn(Self::run_read_loop(inner, reader, task_cancel));

        *self.inner.connection.lock().await = Some(ActiveConnection {
            writer,
            cancel,
            read_task,
        });
        *self.inner.state.lock().await = ListenerState::Running;
        Ok(())
    }

    async fn run_read_loop(
        inner: Arc<Inner<T>>,
        mut reader: FrameReader<tokio::io::ReadHalf<BoxedStream>>,
        cancel: CancellationToken,
    ) {
        let id = inner.id;
        let cancelled = loop {
            let outcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => break true,
                outcome = reader.read_one_chunk(id) => outcome,
            };

            match outcome {
                Ok(Some(Chunk::Request(request))) => {
                    let _ = inner.message_tx.send(Chunk::Request(request));
                }
                Ok(Some(Chunk::Response(mut response))) => {
                    response.original_request = inner.correlator.resolve(response.cseq).await;
                    if response.original_request.is_none() {
                        tracing::warn!(
                            source = ?id,
                            cseq = ?response.cseq,
                            "response cseq has no matching outstanding request"
                        );
                    }
                    let _ = inner.message_tx.send(Chunk::Response(response));
                }
                Ok(Some(Chunk::Data(data))) => {
                    let _ = inner.data_tx.send(data);
                }
                Ok(None) => {
                    tracing::debug!(source = ?id, "read task observed eof");
                    break false;
                }
                Err(err) => {
                    tracing::warn!(source = ?id, error = %err, "framing fault, closing connection");
                    break false;
                }
            }
        };

        if !cancelled {
            *inner.state.lock().await = ListenerState::Stopping;
        }
        inner.transport.lock().await.close().await;
        *inner.connection.lock().await = None;
        *inner.state.lock().await = ListenerState::Stopped;
        tracing::info!(source = ?id, "listener reached Stopped");
    }
}
