pub const CR: u8 = b'\r';
pub const LF: u8 = b'\n';
pub const SPACE: u8 = b' ';

pub const CR_STR: &str = "\r";
pub const LF_STR: &str = "\n";
pub const SPACE_STR: &str = " ";
pub const CRLF_STR: &str = "\r\n";

pub const DOLLAR_SIGN: u8 = 0x24;

/// Default cap on a single start-line/header line, guarding against
/// pathological growth when a peer never sends a terminating LF.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 8 * 1024;

/// Maximum payload length an interleaved frame can carry (RFC 2326 §10.12: u16).
pub const MAX_INTERLEAVED_PAYLOAD_LEN: usize = u16::MAX as usize;
