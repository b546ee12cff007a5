use crate::codes::{BIOS_CHARACTERISTICS, BIOS_CHARACTERISTICS_EX1, BIOS_CHARACTERISTICS_EX2};
use crate::error::Error;
use crate::field::FieldReader;
use crate::flags::decode_flags;
use crate::{RawStructure, BIOS_INFORMATION};

const ROM_SIZE_EXTENDED: u8 = 0xFF;
const RELEASE_NOT_SUPPORTED: u8 = 0xFF;

/// BIOS Information (type 0).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BiosRecord {
    pub handle: u16,
    pub vendor: Option<String>,
    pub version: Option<String>,
    pub release_date: Option<String>,
    pub starting_address_segment: String,
    pub rom_size_kb: u64,
    pub characteristics: Vec<String>,
    pub characteristics_ex: Vec<String>,
    pub major_release: Option<u8>,
    pub minor_release: Option<u8>,
    pub firmware_major_release: Option<u8>,
    pub firmware_minor_release: Option<u8>,
}

impl BiosRecord {
    pub fn from_raw_structure(raw: &RawStructure) -> Result<Self, Error> {
        raw.expect_type(BIOS_INFORMATION)?;
        Self::decode(raw).map_err(|e| raw.malformed(e))
    }

    fn decode(raw: &RawStructure) -> Result<Self, Error> {
        let f = &raw.formatted;

        let characteristics = f.read_u16_le(14)?;

        Ok(BiosRecord {
            handle: raw.handle,
            vendor: raw.string_field(0)?,
            version: raw.string_field(1)?,
            release_date: raw.string_field(4)?,
            starting_address_segment: format!("0x{:04X}", f.read_u16_le(2)?),
            rom_size_kb: rom_size_kb(f)?,
            characteristics: decode_flags(characteristics as u64, &BIOS_CHARACTERISTICS),
            characteristics_ex: characteristics_ex(f.read_u8(14)?, f.read_u8(15)?),
            major_release: release(f.read_u8(16)?),
            minor_release: release(f.read_u8(17)?),
            firmware_major_release: release(f.read_u8(18)?),
            firmware_minor_release: release(f.read_u8(19)?),
        })
    }

    pub fn system_bios_release(&self) -> Option<String> {
        if let (Some(major), Some(minor)) = (self.major_release, self.minor_release) {
            return Some(format!("{}.{}", major, minor));
        }

        None
    }

    pub fn firmware_release(&self) -> Option<String> {
        if let (Some(major), Some(minor)) = (self.firmware_major_release, self.firmware_minor_release)
        {
            return Some(format!("{}.{}", major, minor));
        }

        None
    }
}

fn rom_size_kb(f: &[u8]) -> Result<u64, Error> {
    let size = f.read_u8(5)?;
    if size != ROM_SIZE_EXTENDED {
        return Ok((size as u64 + 1) * 64);
    }

    // Extended BIOS ROM Size: bits 15:14 unit, bits 13:0 size.
    let ex = f.read_u16_le(20)?;
    let value = (ex & 0x3FFF) as u64;
    match ex >> 14 {
        0b00 => Ok(value * 1024),
        0b01 => Ok(value * 1024 * 1024),
        _ => Err(Error::ReservedValue {
            offset: 20,
            value: ex as u32,
        }),
    }
}

fn characteristics_ex(byte1: u8, byte2: u8) -> Vec<String> {
    let mut names = decode_flags(byte1 as u64, &BIOS_CHARACTERISTICS_EX1);
    names.append(&mut decode_flags(byte2 as u64, &BIOS_CHARACTERISTICS_EX2));
    names
}

fn release(value: u8) -> Option<u8> {
    if value == RELEASE_NOT_SUPPORTED {
        None
    } else {
        Some(value)
    }
}
