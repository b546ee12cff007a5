use super::error::Error;
use super::{SmbiosTable, SmbiosVersion};
use bytes::{Buf, Bytes};
use std::fs;

const DMI_PATH: &str = "/sys/firmware/dmi/tables/DMI";
const SMBIOS_ENTRY_POINT_PATH: &str = "/sys/firmware/dmi/tables/smbios_entry_point";

const ANCHOR2: &[u8] = b"_SM_";
const ANCHOR3: &[u8] = b"_SM3_";

/// Reads the structure table exported by the kernel through sysfs.
pub fn open_table() -> Result<SmbiosTable, Error> {
    let entry = Bytes::from(fs::read(SMBIOS_ENTRY_POINT_PATH)?);
    let version = parse_entry_point(entry)?;
    log::debug!("SMBIOS {} entry point", version);

    let data = fs::read(DMI_PATH)?;
    Ok(SmbiosTable::new(version, data))
}

fn parse_entry_point(entry: Bytes) -> Result<SmbiosVersion, Error> {
    if entry.starts_with(ANCHOR3) {
        get_version3(entry)
    } else if entry.starts_with(ANCHOR2) {
        get_version2(entry)
    } else {
        Err(Error::UnsupportedEntryPoint)
    }
}

fn get_version2(entry: Bytes) -> Result<SmbiosVersion, Error> {
    if entry.len() < 0x1F {
        return Err(Error::UnsupportedEntryPoint);
    }

    let mut entry = entry;
    entry.advance(ANCHOR2.len());
    let _entry_checksum = entry.get_u8();
    let _entry_length = entry.get_u8();
    let major = entry.get_u8();
    let minor = entry.get_u8();

    Ok(SmbiosVersion {
        major,
        minor,
        revision: 0,
    })
}

fn get_version3(entry: Bytes) -> Result<SmbiosVersion, Error> {
    if entry.len() < 0x18 {
        return Err(Error::UnsupportedEntryPoint);
    }

    let mut entry = entry;
    entry.advance(ANCHOR3.len());
    let _entry_checksum = entry.get_u8();
    let _entry_length = entry.get_u8();
    let major = entry.get_u8();
    let minor = entry.get_u8();
    let revision = entry.get_u8();

    Ok(SmbiosVersion {
        major,
        minor,
        revision,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_entry_point_v2() {
        let mut entry = b"_SM_".to_vec();
        entry.extend_from_slice(&[0x00, 0x1F, 0x02, 0x08]);
        entry.resize(0x1F, 0);

        assert_eq!(
            parse_entry_point(Bytes::from(entry)).unwrap(),
            SmbiosVersion {
                major: 2,
                minor: 8,
                revision: 0
            }
        );
    }

    #[test]
    fn test_entry_point_v3() {
        let mut entry = b"_SM3_".to_vec();
        entry.extend_from_slice(&[0x00, 0x18, 0x03, 0x04, 0x01]);
        entry.resize(0x18, 0);

        assert_eq!(
            parse_entry_point(Bytes::from(entry)).unwrap(),
            SmbiosVersion {
                major: 3,
                minor: 4,
                revision: 1
            }
        );
    }

    #[test]
    fn test_entry_point_invalid() {
        assert!(matches!(
            parse_entry_point(Bytes::from_static(b"_DMI_")),
            Err(Error::UnsupportedEntryPoint)
        ));
        assert!(matches!(
            parse_entry_point(Bytes::from_static(b"_SM3_\x00")),
            Err(Error::UnsupportedEntryPoint)
        ));
    }
}
