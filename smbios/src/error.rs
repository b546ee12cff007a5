use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    #[cfg(target_family = "windows")]
    Win32(windows::core::Error),
    /// A fixed-offset read ran past the end of the formatted area.
    OutOfRange {
        offset: usize,
        width: usize,
        len: usize,
    },
    /// A formatted area too long for the one-byte structure length.
    StructureTooLong { len: usize },
    /// A string reference points past the end of the string pool.
    IndexOutOfRange { index: u8, count: usize },
    /// A record could not be built from a structure.
    MalformedStructure {
        table_ty: u8,
        handle: u16,
        cause: Box<Error>,
    },
    /// A field holds a value the format reserves.
    ReservedValue { offset: usize, value: u32 },
    UnexpectedType { expected: u8, actual: u8 },
    /// The table data ended inside a structure starting at `offset`.
    TruncatedStructure { offset: usize },
    UnsupportedEntryPoint,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            #[cfg(target_family = "windows")]
            Error::Win32(e) => write!(f, "Win32 error: {}", e),
            Error::OutOfRange { offset, width, len } => write!(
                f,
                "{} byte field at offset {} exceeds formatted area of {} bytes",
                width, offset, len
            ),
            Error::StructureTooLong { len } => {
                write!(f, "formatted area of {} bytes exceeds structure length", len)
            }
            Error::IndexOutOfRange { index, count } => write!(
                f,
                "string index {} exceeds string pool of {} entries",
                index, count
            ),
            Error::MalformedStructure {
                table_ty,
                handle,
                cause,
            } => write!(
                f,
                "malformed structure (handle 0x{:04X}, DMI type {}): {}",
                handle, table_ty, cause
            ),
            Error::ReservedValue { offset, value } => {
                write!(f, "reserved value 0x{:X} at offset {}", value, offset)
            }
            Error::UnexpectedType { expected, actual } => {
                write!(f, "expected DMI type {}, found {}", expected, actual)
            }
            Error::TruncatedStructure { offset } => {
                write!(f, "table data truncated in structure at offset {}", offset)
            }
            Error::UnsupportedEntryPoint => write!(f, "unsupported SMBIOS entry point"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            #[cfg(target_family = "windows")]
            Error::Win32(e) => Some(e),
            Error::MalformedStructure { cause, .. } => Some(cause.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io(error)
    }
}

#[cfg(target_family = "windows")]
impl From<windows::core::Error> for Error {
    fn from(error: windows::core::Error) -> Self {
        Error::Win32(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_malformed_structure_exposes_cause() {
        let err = Error::MalformedStructure {
            table_ty: 4,
            handle: 0x0400,
            cause: Box::new(Error::OutOfRange {
                offset: 34,
                width: 2,
                len: 26,
            }),
        };

        assert_eq!(
            err.to_string(),
            "malformed structure (handle 0x0400, DMI type 4): \
             2 byte field at offset 34 exceeds formatted area of 26 bytes"
        );
        assert!(matches!(
            err.source()
                .and_then(|e| e.downcast_ref::<Error>()),
            Some(Error::OutOfRange { offset: 34, .. })
        ));
    }

    #[test]
    fn test_io_error_conversion() {
        let err = Error::from(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(matches!(err, Error::Io(_)));
        assert!(err.source().is_some());
    }
}
