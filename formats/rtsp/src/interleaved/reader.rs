use byteorder::ReadBytesExt;
use bytes::{Buf, Bytes};
use utils::traits::reader::{TryReadFrom, TryReadRemainingFrom};

use crate::{consts::common::MAX_INTERLEAVED_PAYLOAD_LEN, errors::RtspMessageError};

use super::{DOLLAR_SIGN, RtspInterleavedPacket};

impl<R: AsRef<[u8]>> TryReadRemainingFrom<u8, R> for RtspInterleavedPacket {
    type Error = RtspMessageError;
    fn try_read_remaining_from(
        header: u8,
        reader: &mut std::io::Cursor<R>,
    ) -> Result<Option<Self>, Self::Error> {
        if header != DOLLAR_SIGN {
            return Err(RtspMessageError::InvalidInterleavedSign(header));
        }

        if reader.remaining() < 3 {
            return Ok(None);
        }

        let channel_id = reader.read_u8()?;
        let data_length = reader.read_u16::<byteorder::BigEndian>()? as usize;
        if data_length > MAX_INTERLEAVED_PAYLOAD_LEN {
            return Err(RtspMessageError::InvalidInterleavedDataLength(data_length));
        }
        if reader.remaining() < data_length {
            return Ok(None);
        }

        let mut data = vec![0; data_length];
        reader.copy_to_slice(&mut data);
        Ok(Some(Self {
            channel_id,
            payload: Bytes::from(data),
        }))
    }
}

impl<R: AsRef<[u8]>> TryReadFrom<R> for RtspInterleavedPacket {
    type Error = RtspMessageError;
    fn try_read_from(reader: &mut std::io::Cursor<R>) -> Result<Option<Self>, Self::Error> {
        if reader.remaining() < 4 {
            return Ok(None);
        }

        let sign = reader.read_u8()?;
        if sign != DOLLAR_SIGN {
            return Err(RtspMessageError::InvalidInterleavedSign(sign));
        }
        Self::try_read_remaining_from(sign, reader)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use utils::traits::reader::TryReadFrom;

    use super::RtspInterleavedPacket;

    #[test]
    fn reads_a_complete_packet() {
        let mut bytes = vec![0x24, 0x00, 0x00, 0x03, 0xaa, 0xbb, 0xcc];
        bytes.extend_from_slice(b"trailing");
        let mut cursor = Cursor::new(bytes);
        let packet = RtspInterleavedPacket::try_read_from(&mut cursor)
            .unwrap()
            .unwrap();
        assert_eq!(packet.channel_id, 0);
        assert_eq!(&packet.payload[..], &[0xaa, 0xbb, 0xcc]);
        assert_eq!(cursor.position(), 7);
    }

    #[test]
    fn waits_for_more_data_when_payload_is_incomplete() {
        let bytes = vec![0x24, 0x01, 0x00, 0x05, 0xaa, 0xbb];
        let mut cursor = Cursor::new(bytes);
        let packet = RtspInterleavedPacket::try_read_from(&mut cursor).unwrap();
        assert!(packet.is_none());
    }

    #[test]
    fn rejects_a_bad_magic_byte() {
        let bytes = vec![0x20, 0x00, 0x00, 0x00];
        let mut cursor = Cursor::new(bytes);
        assert!(RtspInterleavedPacket::try_read_from(&mut cursor).is_err());
    }
}
