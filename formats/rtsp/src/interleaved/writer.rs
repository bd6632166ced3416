use byteorder::{BigEndian, WriteBytesExt};
use std::io;
use utils::traits::writer::WriteTo;

use crate::errors::RtspMessageError;

use super::{DOLLAR_SIGN, RtspInterleavedPacket};

impl<W: io::Write> WriteTo<W> for RtspInterleavedPacket {
    type Error = RtspMessageError;
    fn write_to(&self, writer: &mut W) -> Result<(), Self::Error> {
        let length = u16::try_from(self.payload.len())
            .map_err(|_| RtspMessageError::InvalidInterleavedDataLength(self.payload.len()))?;
        writer.write_u8(DOLLAR_SIGN)?;
        writer.write_u8(self.channel_id)?;
        writer.write_u16::<BigEndian>(length)?;
        writer.write_all(&self.payload)?;
        Ok(())
    }
}
