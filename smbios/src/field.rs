use crate::error::Error;
use bytes::Buf;

/// Bounds-checked fixed-offset access to a structure's formatted area.
///
/// Offsets are relative to the first byte after the 4-byte header and all
/// multi-byte values are little-endian.
pub trait FieldReader {
    fn read_u8(&self, offset: usize) -> Result<u8, Error>;

    fn read_u16_le(&self, offset: usize) -> Result<u16, Error>;

    fn read_u32_le(&self, offset: usize) -> Result<u32, Error>;
}

impl FieldReader for [u8] {
    fn read_u8(&self, offset: usize) -> Result<u8, Error> {
        field(self, offset, 1).map(|mut f| f.get_u8())
    }

    fn read_u16_le(&self, offset: usize) -> Result<u16, Error> {
        field(self, offset, 2).map(|mut f| f.get_u16_le())
    }

    fn read_u32_le(&self, offset: usize) -> Result<u32, Error> {
        field(self, offset, 4).map(|mut f| f.get_u32_le())
    }
}

fn field(buf: &[u8], offset: usize, width: usize) -> Result<&[u8], Error> {
    offset
        .checked_add(width)
        .filter(|end| *end <= buf.len())
        .map(|end| &buf[offset..end])
        .ok_or(Error::OutOfRange {
            offset,
            width,
            len: buf.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const AREA: [u8; 6] = [0x01, 0x34, 0x12, 0x78, 0x56, 0x34];

    #[test]
    fn test_read_u8() {
        assert_eq!(AREA.read_u8(0).unwrap(), 0x01);
        assert_eq!(AREA.read_u8(5).unwrap(), 0x34);
    }

    #[test]
    fn test_read_little_endian() {
        assert_eq!(AREA.read_u16_le(1).unwrap(), 0x1234);
        assert_eq!(AREA.read_u32_le(1).unwrap(), 0x5678_1234);
        assert_eq!(AREA.read_u32_le(2).unwrap(), 0x3456_7812);
    }

    #[test]
    fn test_read_past_end() {
        assert!(matches!(
            AREA.read_u8(6),
            Err(Error::OutOfRange {
                offset: 6,
                width: 1,
                len: 6
            })
        ));
        assert!(matches!(
            AREA.read_u16_le(5),
            Err(Error::OutOfRange { width: 2, .. })
        ));
        assert!(matches!(
            AREA.read_u32_le(3),
            Err(Error::OutOfRange { width: 4, .. })
        ));
    }

    #[test]
    fn test_offset_overflow() {
        assert!(AREA.read_u16_le(usize::MAX).is_err());
        assert!([].read_u8(0).is_err());
    }
}
