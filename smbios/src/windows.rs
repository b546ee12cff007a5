use super::error::Error;
use super::{SmbiosTable, SmbiosVersion};
use bytes::{Buf, Bytes};
use windows::Win32::System::SystemInformation::{
    EnumSystemFirmwareTables, GetSystemFirmwareTable, FIRMWARE_TABLE_ID, FIRMWARE_TABLE_PROVIDER,
};

const FIRMWARE_TABLE_RSMB: u32 = 0x52534D42; // 'RSMB'

const RAW_SMBIOS_DATA_HEADER: usize = 8;

/// Reads the structure table through `GetSystemFirmwareTable`.
pub fn open_table() -> Result<SmbiosTable, Error> {
    let tables = enum_system_firmware_table(FIRMWARE_TABLE_RSMB)?;
    let table_id = tables.first().copied().ok_or(Error::UnsupportedEntryPoint)?;

    let bytes = get_system_firmware_table(FIRMWARE_TABLE_RSMB, table_id)?;
    parse_raw_smbios_data(Bytes::from(bytes))
}

// RawSMBIOSData: calling method, major, minor, DMI revision, table length.
fn parse_raw_smbios_data(buf: Bytes) -> Result<SmbiosTable, Error> {
    if buf.len() < RAW_SMBIOS_DATA_HEADER {
        return Err(Error::UnsupportedEntryPoint);
    }

    let mut buf = buf;
    let _used_20_calling_method = buf.get_u8();
    let major = buf.get_u8();
    let minor = buf.get_u8();
    let revision = buf.get_u8();
    let length = buf.get_u32_le() as usize;
    buf.truncate(length);

    let version = SmbiosVersion {
        major,
        minor,
        revision,
    };
    log::debug!("SMBIOS {} from firmware table", version);

    Ok(SmbiosTable::new(version, buf))
}

fn enum_system_firmware_table(signature: u32) -> Result<Vec<u32>, Error> {
    // https://docs.microsoft.com/en-us/windows/win32/api/sysinfoapi/nf-sysinfoapi-enumsystemfirmwaretables

    let sig = FIRMWARE_TABLE_PROVIDER(signature);

    let size = unsafe { EnumSystemFirmwareTables(sig, std::ptr::null_mut(), 0) };
    if size == 0 {
        return Err(windows::core::Error::from_win32().into());
    }

    let mut buffer = vec![0u32; (size / 4) as usize];

    let size = unsafe {
        let buf = buffer.as_mut_ptr() as *mut FIRMWARE_TABLE_ID;
        EnumSystemFirmwareTables(sig, buf, size)
    };
    if size == 0 {
        return Err(windows::core::Error::from_win32().into());
    }

    Ok(buffer)
}

fn get_system_firmware_table(signature: u32, table_id: u32) -> Result<Vec<u8>, Error> {
    // https://docs.microsoft.com/en-us/windows/win32/api/sysinfoapi/nf-sysinfoapi-getsystemfirmwaretable

    let sig = FIRMWARE_TABLE_PROVIDER(signature);
    let id = FIRMWARE_TABLE_ID(table_id);

    let size = unsafe { GetSystemFirmwareTable(sig, id, std::ptr::null_mut(), 0) };
    if size == 0 {
        return Err(windows::core::Error::from_win32().into());
    }

    let mut buffer = vec![0u8; size as usize];

    let size = unsafe {
        let buf = buffer.as_mut_ptr() as *mut std::ffi::c_void;
        GetSystemFirmwareTable(sig, id, buf, size)
    };
    if size == 0 {
        return Err(windows::core::Error::from_win32().into());
    }

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_raw_smbios_data() {
        let data = vec![
            0x00, 0x03, 0x04, 0x00, 0x06, 0x00, 0x00, 0x00, // header
            0x7F, 0x04, 0x00, 0x01, 0x00, 0x00, // end of table
            0xAA, // past the declared length
        ];
        let table = parse_raw_smbios_data(Bytes::from(data)).unwrap();

        assert_eq!(table.version.to_string(), "3.4.0");
        assert_eq!(&table.data[..], &[0x7F, 0x04, 0x00, 0x01, 0x00, 0x00]);
        assert!(matches!(
            parse_raw_smbios_data(Bytes::from_static(&[0x00, 0x03])),
            Err(Error::UnsupportedEntryPoint)
        ));
    }
}
