use std::{fmt, io};

use utils::traits::reader::{ReadFrom, TryReadFrom};

use crate::{errors::RtspMessageError, util::TextReader};

pub use crate::consts::headers::RtspHeader;
use crate::consts::common::CRLF_STR;

/// An ordered multimap of RTSP headers. Preserves insertion order and the
/// original case of values; keys are normalized to [`RtspHeader`] at parse
/// time, which makes lookup case-insensitive by construction.
#[derive(Debug, Default, Clone)]
pub struct RtspHeaders(Vec<(RtspHeader, String)>);

impl RtspHeaders {
    pub fn new(items: Vec<(RtspHeader, String)>) -> Self {
        Self(items)
    }

    pub fn push<S: Into<String>>(&mut self, key: RtspHeader, value: S) {
        self.0.push((key, value.into()));
    }

    pub fn append(&mut self, mut items: Vec<(RtspHeader, String)>) {
        self.0.append(&mut items);
    }

    pub fn get(&self, key: RtspHeader) -> Vec<&String> {
        self.0
            .iter()
            .filter(|(k, _)| k.eq(&key))
            .map(|(_, value)| value)
            .collect()
    }

    pub fn get_unique(&self, key: RtspHeader) -> Option<&String> {
        self.get(key).first().copied()
    }

    pub fn contains(&self, key: RtspHeader) -> bool {
        self.0.iter().any(|(k, _)| k.eq(&key))
    }

    pub fn remove(&mut self, key: RtspHeader) {
        self.0.retain(|(k, _)| k.ne(&key));
    }

    pub fn entries(&self) -> &Vec<(RtspHeader, String)> {
        &self.0
    }

    pub fn entries_mut(&mut self) -> &mut Vec<(RtspHeader, String)> {
        &mut self.0
    }

    pub fn set<S: Into<String>>(&mut self, key: RtspHeader, value: S) {
        self.remove(key);
        self.push(key, value);
    }

    pub fn cseq(&self) -> Option<u32> {
        self.get_unique(RtspHeader::CSeq)
            .and_then(|cseq| cseq.trim().parse().ok())
    }

    pub fn content_length(&self) -> Option<usize> {
        self.get_unique(RtspHeader::ContentLength)
            .and_then(|len| len.trim().parse().ok())
    }
}

impl fmt::Display for RtspHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.entries().iter().try_for_each(|(key, value)| {
            f.write_fmt(format_args!("{}: {}{}", key, value, CRLF_STR))
        })
    }
}

impl<R: io::BufRead> ReadFrom<R> for RtspHeaders {
    type Error = RtspMessageError;
    fn read_from(mut reader: R) -> Result<Self, Self::Error> {
        let buffer = reader.fill_buf()?.to_vec();
        let mut cursor = io::Cursor::new(&buffer);
        if let Some(headers) = Self::try_read_from(&mut cursor)? {
            reader.consume(cursor.position() as usize);
            return Ok(headers);
        }
        Err(RtspMessageError::InvalidRtspMessageFormat(format!(
            "the message is incomplete: {}",
            String::from_utf8_lossy(&buffer),
        )))
    }
}

impl<R: AsRef<[u8]>> TryReadFrom<R> for RtspHeaders {
    type Error = RtspMessageError;
    fn try_read_from(reader: &mut io::Cursor<R>) -> Result<Option<Self>, Self::Error> {
        let mut text_reader = TextReader::new(reader.by_ref());
        let mut headers = vec![];
        loop {
            let line = text_reader.try_read_line()?;
            if line.is_none() {
                return Ok(None);
            }

            let line = line.unwrap();
            let trimmed_line = line.trim();
            if trimmed_line.is_empty() {
                break;
            }
            let parts: Vec<_> = trimmed_line.splitn(2, ':').collect();
            if parts.len() < 2 {
                return Err(RtspMessageError::InvalidRtspMessageFormat(format!(
                    "invalid header line: {}",
                    line
                )));
            }

            let key: RtspHeader = parts[0].trim().parse()?;
            headers.push((key, parts[1].trim().to_owned()));
        }

        Ok(Some(Self(headers)))
    }
}
