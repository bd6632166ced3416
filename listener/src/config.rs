/// Tunables for one listener instance. Plain config struct, matching the
/// teacher's `RtspServerConfig`-style — no file parsing, no env vars.
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    pub auto_reconnect: bool,
    pub max_line_length: usize,
    pub outstanding_request_table_hint: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            auto_reconnect: false,
            max_line_length: rtsp_formats::consts::common::DEFAULT_MAX_LINE_LENGTH,
            outstanding_request_table_hint: 32,
        }
    }
}
