use std::io::{self, Cursor};

/// Reads `Self` from a reader that is known to hold a complete value.
pub trait ReadFrom<R: io::Read>: Sized {
    type Error;
    fn read_from(reader: R) -> Result<Self, Self::Error>;
}

/// Like [`ReadFrom`], but the first token of the value has already been consumed
/// (e.g. the method name or version that discriminates a request from a response).
pub trait ReadRemainingFrom<Header, R: io::Read>: Sized {
    type Error;
    fn read_remaining_from(header: Header, reader: R) -> Result<Self, Self::Error>;
}

/// Attempts to read `Self` from a byte cursor, returning `Ok(None)` rather than
/// erroring when the cursor does not yet hold enough bytes for a complete value.
pub trait TryReadFrom<R: AsRef<[u8]>>: Sized {
    type Error;
    fn try_read_from(reader: &mut Cursor<R>) -> Result<Option<Self>, Self::Error>;
}

/// Like [`TryReadFrom`], given an already-consumed discriminating header token.
pub trait TryReadRemainingFrom<Header, R: AsRef<[u8]>>: Sized {
    type Error;
    fn try_read_remaining_from(
        header: Header,
        reader: &mut Cursor<R>,
    ) -> Result<Option<Self>, Self::Error>;
}
