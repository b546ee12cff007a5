pub mod bios;
pub mod codes;
pub mod error;
pub mod field;
pub mod flags;
pub mod lookup;
pub mod processor;

#[cfg(target_family = "unix")]
mod unix;
#[cfg(target_family = "windows")]
mod windows;

pub use self::bios::BiosRecord;
pub use self::processor::ProcessorRecord;
#[cfg(target_family = "unix")]
pub use self::unix::open_table;
#[cfg(target_family = "windows")]
pub use self::windows::open_table;

use self::error::Error;
use self::field::FieldReader;
use bytes::{Buf, Bytes};
use std::fmt;
use std::fs;
use std::path::Path;

pub const BIOS_INFORMATION: u8 = 0;
pub const PROCESSOR_INFORMATION: u8 = 4;
pub const END_OF_TABLE: u8 = 127;

const HEADER_LENGTH: usize = 4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SmbiosVersion {
    pub major: u8,
    pub minor: u8,
    pub revision: u8,
}

impl fmt::Display for SmbiosVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.revision)
    }
}

/// The raw structure table together with the entry point version.
pub struct SmbiosTable {
    pub version: SmbiosVersion,
    pub data: Bytes,
}

impl SmbiosTable {
    pub fn new(version: SmbiosVersion, data: impl Into<Bytes>) -> Self {
        SmbiosTable {
            version,
            data: data.into(),
        }
    }

    /// Loads a structure table dumped to a file, e.g. a copy of
    /// `/sys/firmware/dmi/tables/DMI`. The version is not known.
    pub fn from_dump(path: impl AsRef<Path>) -> Result<Self, Error> {
        let data = fs::read(path)?;
        Ok(SmbiosTable::new(SmbiosVersion::default(), data))
    }

    pub fn structures(&self) -> Structures {
        Structures {
            data: self.data.clone(),
            offset: 0,
            done: false,
        }
    }
}

/// Splits table data into structures.
///
/// Iteration ends after the End-of-Table structure, at the end of the data,
/// or after the first truncated structure has been reported.
pub struct Structures {
    data: Bytes,
    offset: usize,
    done: bool,
}

impl Iterator for Structures {
    type Item = Result<RawStructure, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || !self.data.has_remaining() {
            return None;
        }

        let before = self.data.remaining();
        match RawStructure::split_from(&mut self.data) {
            Some(structure) => {
                self.offset += before - self.data.remaining();
                if structure.table_ty == END_OF_TABLE {
                    log::debug!("end of table at offset {}", self.offset);
                    self.done = true;
                }
                Some(Ok(structure))
            }
            None => {
                self.done = true;
                Some(Err(Error::TruncatedStructure {
                    offset: self.offset,
                }))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawStructure {
    pub table_ty: u8,
    pub length: u8,
    pub handle: u16,
    /// Bytes following the 4-byte header.
    pub formatted: Bytes,
    pub strings: Vec<String>,
}

impl RawStructure {
    pub fn new(
        table_ty: u8,
        handle: u16,
        formatted: impl Into<Bytes>,
        strings: Vec<String>,
    ) -> Result<Self, Error> {
        let formatted = formatted.into();
        let length = u8::try_from(formatted.len() + HEADER_LENGTH).map_err(|_| {
            Error::StructureTooLong {
                len: formatted.len(),
            }
        })?;

        Ok(RawStructure {
            table_ty,
            length,
            handle,
            formatted,
            strings,
        })
    }

    pub fn get_string_by_index(&self, index: u8) -> Result<Option<String>, Error> {
        resolve_string(&self.strings, index)
    }

    /// Resolves the string whose index is stored at `offset`.
    pub fn string_field(&self, offset: usize) -> Result<Option<String>, Error> {
        let index = self.formatted.read_u8(offset)?;
        self.get_string_by_index(index)
    }

    pub(crate) fn expect_type(&self, expected: u8) -> Result<(), Error> {
        if self.table_ty != expected {
            return Err(Error::UnexpectedType {
                expected,
                actual: self.table_ty,
            });
        }

        Ok(())
    }

    pub(crate) fn malformed(&self, cause: Error) -> Error {
        Error::MalformedStructure {
            table_ty: self.table_ty,
            handle: self.handle,
            cause: Box::new(cause),
        }
    }

    fn split_from(buf: &mut Bytes) -> Option<Self> {
        if buf.remaining() < HEADER_LENGTH {
            return None;
        }

        let table_ty = buf.get_u8();
        let length = buf.get_u8();
        let handle = buf.get_u16_le();

        let formatted_len = (length as usize).checked_sub(HEADER_LENGTH)?;
        if buf.remaining() < formatted_len {
            return None;
        }
        let formatted = buf.split_to(formatted_len);

        let mut strings = vec![];
        loop {
            let end = buf.iter().position(|c| *c == 0)?;
            let value = buf.split_to(end);
            buf.advance(1);

            if !value.is_empty() {
                strings.push(String::from_utf8_lossy(&value).to_string());
                continue;
            }

            // A structure without strings ends with two NULs.
            if strings.is_empty() {
                if buf.first() != Some(&0) {
                    return None;
                }
                buf.advance(1);
            }
            break;
        }

        Some(RawStructure {
            table_ty,
            length,
            handle,
            formatted,
            strings,
        })
    }
}

/// Resolves a 1-based string reference; index 0 means "not specified".
pub fn resolve_string(strings: &[String], index: u8) -> Result<Option<String>, Error> {
    if index == 0 {
        return Ok(None);
    }

    strings
        .get((index as usize) - 1)
        .map(|s| Some(s.trim().to_string()))
        .ok_or(Error::IndexOutOfRange {
            index,
            count: strings.len(),
        })
}
