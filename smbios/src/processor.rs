use crate::codes::{
    CPU_STATUS, PROCESSOR_CHARACTERISTICS, PROCESSOR_FAMILIES, PROCESSOR_FEATURE_FLAGS,
    PROCESSOR_TYPES, PROCESSOR_UPGRADES,
};
use crate::error::Error;
use crate::field::FieldReader;
use crate::flags::decode_flags;
use crate::lookup::lookup_code;
use crate::{RawStructure, PROCESSOR_INFORMATION};

const FAMILY_SEE_FAMILY2: u8 = 0xFE;
const COUNT_SEE_COUNT2: u8 = 0xFF;

/// Processor Information (type 4).
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessorRecord {
    pub handle: u16,
    pub socket_designation: Option<String>,
    pub processor_type: String,
    pub processor_family: String,
    pub manufacturer: Option<String>,
    pub stepping: u8,
    pub model: u8,
    pub family: u8,
    pub version: Option<String>,
    pub voltage: f32,
    pub external_clock: u16,
    pub max_speed: u16,
    pub current_speed: u16,
    pub status: Vec<String>,
    pub processor_upgrade: String,
    pub l1_cache_handle: String,
    pub l2_cache_handle: String,
    pub l3_cache_handle: String,
    pub serial_number: Option<String>,
    pub asset_tag: Option<String>,
    pub part_number: Option<String>,
    pub core_count: u8,
    pub core_enabled: u8,
    pub thread_count: u8,
    pub core_count2: Option<u16>,
    pub core_enabled2: Option<u16>,
    pub thread_count2: Option<u16>,
    pub characteristics: Vec<String>,
    pub flags: Vec<String>,
}

impl ProcessorRecord {
    pub fn from_raw_structure(raw: &RawStructure) -> Result<Self, Error> {
        raw.expect_type(PROCESSOR_INFORMATION)?;
        Self::decode(raw).map_err(|e| raw.malformed(e))
    }

    fn decode(raw: &RawStructure) -> Result<Self, Error> {
        let f = &raw.formatted;

        let signature = f.read_u8(4)?;

        Ok(ProcessorRecord {
            handle: raw.handle,
            socket_designation: raw.string_field(0)?,
            processor_type: lookup_code(&PROCESSOR_TYPES, f.read_u8(1)? as u16),
            processor_family: processor_family(f)?,
            manufacturer: raw.string_field(3)?,
            stepping: signature & 0x0F,
            model: model(signature, f.read_u8(6)?),
            family: f.read_u8(5)? & 0x0F,
            version: raw.string_field(12)?,
            voltage: voltage(f.read_u8(13)?),
            external_clock: f.read_u16_le(14)?,
            max_speed: f.read_u16_le(16)?,
            current_speed: f.read_u16_le(18)?,
            status: status(f.read_u8(20)?),
            processor_upgrade: lookup_code(&PROCESSOR_UPGRADES, f.read_u8(21)? as u16),
            l1_cache_handle: cache_handle(f.read_u16_le(22)?),
            l2_cache_handle: cache_handle(f.read_u16_le(24)?),
            l3_cache_handle: cache_handle(f.read_u16_le(26)?),
            serial_number: raw.string_field(28)?,
            asset_tag: raw.string_field(29)?,
            part_number: raw.string_field(30)?,
            core_count: f.read_u8(31)?,
            core_enabled: f.read_u8(32)?,
            thread_count: f.read_u8(33)?,
            core_count2: f.read_u16_le(38).ok(),
            core_enabled2: f.read_u16_le(40).ok(),
            thread_count2: f.read_u16_le(42).ok(),
            characteristics: decode_flags(f.read_u16_le(34)? as u64, &PROCESSOR_CHARACTERISTICS),
            flags: decode_flags(f.read_u32_le(8)? as u64, &PROCESSOR_FEATURE_FLAGS),
        })
    }

    pub fn core_count_mixed(&self) -> u16 {
        count_mixed(self.core_count, self.core_count2)
    }

    pub fn core_enabled_mixed(&self) -> u16 {
        count_mixed(self.core_enabled, self.core_enabled2)
    }

    pub fn thread_count_mixed(&self) -> u16 {
        count_mixed(self.thread_count, self.thread_count2)
    }
}

fn processor_family(f: &[u8]) -> Result<String, Error> {
    let family = f.read_u8(2)?;
    if family == FAMILY_SEE_FAMILY2 {
        if let Ok(family2) = f.read_u16_le(36) {
            return Ok(lookup_code(&PROCESSOR_FAMILIES, family2));
        }
    }

    Ok(lookup_code(&PROCESSOR_FAMILIES, family as u16))
}

/// High nibble of the first signature byte forms bits 3:0, high nibble of
/// the third forms bits 7:4.
fn model(signature0: u8, signature2: u8) -> u8 {
    (signature0 >> 4) | (signature2 & 0xF0)
}

fn voltage(value: u8) -> f32 {
    if value & 0x80 != 0 {
        return (value as f32 - 128.0) / 10.0;
    }

    if value & 0x01 != 0 {
        5.0
    } else if value & 0x02 != 0 {
        3.3
    } else if value & 0x04 != 0 {
        2.9
    } else {
        0.0
    }
}

fn status(value: u8) -> Vec<String> {
    let populated = if value & 0x40 != 0 {
        "Socket populated"
    } else {
        "Socket unpopulated"
    };

    vec![
        populated.to_string(),
        lookup_code(&CPU_STATUS, (value & 0x07) as u16),
    ]
}

fn cache_handle(handle: u16) -> String {
    format!("0x{:04X}", handle)
}

fn count_mixed(count: u8, count2: Option<u16>) -> u16 {
    match count2 {
        Some(c2) if count == COUNT_SEE_COUNT2 => c2,
        _ => count as u16,
    }
}
