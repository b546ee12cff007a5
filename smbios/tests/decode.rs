use pretty_assertions::assert_eq;
use smbios::error::Error;
use smbios::{
    BiosRecord, ProcessorRecord, SmbiosTable, SmbiosVersion, BIOS_INFORMATION,
    PROCESSOR_INFORMATION,
};

fn push_structure(table: &mut Vec<u8>, ty: u8, handle: u16, formatted: &[u8], strings: &[&str]) {
    table.push(ty);
    table.push((formatted.len() + 4) as u8);
    table.extend_from_slice(&handle.to_le_bytes());
    table.extend_from_slice(formatted);
    if strings.is_empty() {
        table.push(0);
    }
    for s in strings {
        table.extend_from_slice(s.as_bytes());
        table.push(0);
    }
    table.push(0);
}

fn bios_formatted() -> Vec<u8> {
    let mut f = vec![0u8; 20];
    f[0] = 1;
    f[3] = 0xF0;
    f[5] = 0x01;
    f[16] = 0xFF;
    f[17] = 0xFF;
    f[18] = 0xFF;
    f[19] = 0xFF;
    f
}

fn processor_formatted() -> Vec<u8> {
    let mut f = vec![0u8; 36];
    f[0] = 1;
    f[1] = 0x03;
    f[2] = 0x6B;
    f[3] = 2;
    f[4] = 0x12;
    f[5] = 0x0F;
    f[6] = 0x80;
    f[13] = 0x02;
    f[20] = 0x41;
    f[21] = 0x31;
    f[31] = 8;
    f[32] = 8;
    f[33] = 16;
    f
}

fn sample_table() -> SmbiosTable {
    let mut data = vec![];
    push_structure(&mut data, 0, 0x0000, &bios_formatted(), &["Acme Corp "]);
    push_structure(&mut data, 1, 0x0001, &[0x00; 4], &[]);
    push_structure(
        &mut data,
        4,
        0x0004,
        &processor_formatted(),
        &["CPU0", "AuthenticAMD"],
    );
    // too short to hold the core counts
    push_structure(&mut data, 4, 0x0005, &processor_formatted()[..26], &["CPU1"]);
    push_structure(
        &mut data,
        4,
        0x0006,
        &processor_formatted(),
        &["CPU2", "AuthenticAMD"],
    );
    push_structure(&mut data, 127, 0xFFFE, &[], &[]);

    SmbiosTable::new(
        SmbiosVersion {
            major: 3,
            minor: 3,
            revision: 0,
        },
        data,
    )
}

#[test]
fn test_bios_end_to_end() {
    let table = sample_table();

    let bios = table
        .structures()
        .map(|s| s.unwrap())
        .filter(|s| s.table_ty == BIOS_INFORMATION)
        .map(|s| BiosRecord::from_raw_structure(&s).unwrap())
        .collect::<Vec<_>>();

    assert_eq!(bios.len(), 1);
    assert_eq!(bios[0].vendor.as_deref(), Some("Acme Corp"));
    assert_eq!(bios[0].version, None);
    assert_eq!(bios[0].rom_size_kb, 128);
    assert!(bios[0].characteristics.is_empty());
    assert_eq!(bios[0].starting_address_segment, "0xF000");
    assert_eq!(bios[0].system_bios_release(), None);
}

#[test]
fn test_processor_skips_malformed() {
    let table = sample_table();

    let results = table
        .structures()
        .map(|s| s.unwrap())
        .filter(|s| s.table_ty == PROCESSOR_INFORMATION)
        .map(|s| ProcessorRecord::from_raw_structure(&s))
        .collect::<Vec<_>>();

    assert_eq!(results.len(), 3);
    assert!(matches!(
        results[1],
        Err(Error::MalformedStructure { handle: 0x0005, .. })
    ));

    let cpus = results
        .into_iter()
        .filter_map(Result::ok)
        .collect::<Vec<_>>();
    assert_eq!(cpus.len(), 2);
    assert_eq!(cpus[0].socket_designation.as_deref(), Some("CPU0"));
    assert_eq!(cpus[1].socket_designation.as_deref(), Some("CPU2"));

    let cpu = &cpus[0];
    assert_eq!(cpu.manufacturer.as_deref(), Some("AuthenticAMD"));
    assert_eq!(cpu.processor_family, "AMD Zen Processor Family");
    assert_eq!(cpu.processor_upgrade, "Socket AM4");
    assert_eq!(cpu.stepping, 2);
    assert_eq!(cpu.model, 0x81);
    assert_eq!(cpu.family, 0x0F);
    assert_eq!(cpu.voltage, 3.3);
    assert_eq!(cpu.status, vec!["Socket populated", "CPU Enabled"]);
    assert_eq!(cpu.l1_cache_handle, "0x0000");
    assert!(cpu.flags.is_empty());
    assert_eq!(cpu.core_count2, None);
    assert_eq!(cpu.thread_count_mixed(), 16);
}

#[test]
fn test_structures_stop_at_end_of_table() {
    let table = sample_table();

    let types = table
        .structures()
        .map(|s| s.unwrap().table_ty)
        .collect::<Vec<_>>();

    assert_eq!(types, vec![0, 1, 4, 4, 4, 127]);
    assert_eq!(table.version.to_string(), "3.3.0");
}
