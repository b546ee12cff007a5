use clap::{Parser, ValueEnum};
use smbios::error::Error;
use smbios::{
    BiosRecord, ProcessorRecord, RawStructure, SmbiosTable, BIOS_INFORMATION,
    PROCESSOR_INFORMATION,
};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// List BIOS and processor information from the SMBIOS table.
#[derive(Parser)]
#[command(name = "smbios-ls", version)]
struct Args {
    /// Read the structure table from a file instead of the firmware.
    #[arg(long, value_name = "FILE", env = "SMBIOS_LS_DUMP")]
    dump: Option<PathBuf>,

    #[arg(value_enum, default_value_t = Kind::All)]
    kind: Kind,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    Bios,
    Processor,
    All,
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let table = match &args.dump {
        Some(path) => SmbiosTable::from_dump(path)?,
        None => smbios::open_table()?,
    };
    log::info!("{} bytes of structure data", table.data.len());

    let mut out = std::io::stdout().lock();
    out.write_fmt(format_args!("SMBIOS {}\n", table.version))?;

    for structure in table.structures() {
        let structure = structure?;
        match structure.table_ty {
            BIOS_INFORMATION if args.kind != Kind::Processor => {
                if let Some(bios) = record(BiosRecord::from_raw_structure(&structure)) {
                    out.write_fmt(format_args!("\n"))?;
                    dump_bios(&structure, &bios, &mut out)?;
                }
            }
            PROCESSOR_INFORMATION if args.kind != Kind::Bios => {
                if let Some(cpu) = record(ProcessorRecord::from_raw_structure(&structure)) {
                    out.write_fmt(format_args!("\n"))?;
                    dump_processor(&structure, &cpu, &mut out)?;
                }
            }
            _ => {}
        }
    }

    Ok(())
}

// A structure that fails to decode is reported and skipped.
fn record<T>(result: Result<T, Error>) -> Option<T> {
    match result {
        Ok(record) => Some(record),
        Err(e) => {
            log::warn!("skipping {}", e);
            None
        }
    }
}

fn dump_header(raw: &RawStructure, writer: &mut impl Write) -> std::io::Result<()> {
    writer.write_fmt(format_args!(
        "Handle 0x{:04X}, DMI type {}, {} bytes\n",
        raw.handle, raw.table_ty, raw.length
    ))
}

fn dump_list(title: &str, names: &[String], writer: &mut impl Write) -> std::io::Result<()> {
    if names.is_empty() {
        return writer.write_fmt(format_args!("\t{}: None\n", title));
    }

    writer.write_fmt(format_args!("\t{}:\n", title))?;
    for name in names {
        writer.write_fmt(format_args!("\t\t{}\n", name))?;
    }
    Ok(())
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("Not Specified")
}

fn dump_bios(raw: &RawStructure, bios: &BiosRecord, writer: &mut impl Write) -> std::io::Result<()> {
    dump_header(raw, writer)?;
    writer.write_fmt(format_args!("BIOS Information\n"))?;
    writer.write_fmt(format_args!("\tVendor: {}\n", text(&bios.vendor)))?;
    writer.write_fmt(format_args!("\tVersion: {}\n", text(&bios.version)))?;
    writer.write_fmt(format_args!(
        "\tRelease Date: {}\n",
        text(&bios.release_date)
    ))?;
    writer.write_fmt(format_args!(
        "\tAddress: {}\n",
        bios.starting_address_segment
    ))?;
    writer.write_fmt(format_args!("\tROM Size: {} kB\n", bios.rom_size_kb))?;

    let mut characteristics = bios.characteristics.clone();
    characteristics.extend(bios.characteristics_ex.iter().cloned());
    dump_list("Characteristics", &characteristics, writer)?;

    if let Some(release) = bios.system_bios_release() {
        writer.write_fmt(format_args!("\tBIOS Revision: {}\n", release))?;
    }
    if let Some(release) = bios.firmware_release() {
        writer.write_fmt(format_args!("\tFirmware Revision: {}\n", release))?;
    }
    Ok(())
}

fn dump_processor(
    raw: &RawStructure,
    cpu: &ProcessorRecord,
    writer: &mut impl Write,
) -> std::io::Result<()> {
    dump_header(raw, writer)?;
    writer.write_fmt(format_args!("Processor Information\n"))?;
    writer.write_fmt(format_args!(
        "\tSocket Designation: {}\n",
        text(&cpu.socket_designation)
    ))?;
    writer.write_fmt(format_args!("\tType: {}\n", cpu.processor_type))?;
    writer.write_fmt(format_args!("\tFamily: {}\n", cpu.processor_family))?;
    writer.write_fmt(format_args!(
        "\tManufacturer: {}\n",
        text(&cpu.manufacturer)
    ))?;
    writer.write_fmt(format_args!(
        "\tSignature: Family {}, Model {}, Stepping {}\n",
        cpu.family, cpu.model, cpu.stepping
    ))?;
    dump_list("Flags", &cpu.flags, writer)?;
    writer.write_fmt(format_args!("\tVersion: {}\n", text(&cpu.version)))?;
    writer.write_fmt(format_args!("\tVoltage: {:.1} V\n", cpu.voltage))?;
    writer.write_fmt(format_args!(
        "\tExternal Clock: {} MHz\n",
        cpu.external_clock
    ))?;
    writer.write_fmt(format_args!("\tMax Speed: {} MHz\n", cpu.max_speed))?;
    writer.write_fmt(format_args!(
        "\tCurrent Speed: {} MHz\n",
        cpu.current_speed
    ))?;
    writer.write_fmt(format_args!("\tStatus: {}\n", cpu.status.join(", ")))?;
    writer.write_fmt(format_args!("\tUpgrade: {}\n", cpu.processor_upgrade))?;
    writer.write_fmt(format_args!(
        "\tL1 Cache Handle: {}\n",
        cpu.l1_cache_handle
    ))?;
    writer.write_fmt(format_args!(
        "\tL2 Cache Handle: {}\n",
        cpu.l2_cache_handle
    ))?;
    writer.write_fmt(format_args!(
        "\tL3 Cache Handle: {}\n",
        cpu.l3_cache_handle
    ))?;
    writer.write_fmt(format_args!(
        "\tSerial Number: {}\n",
        text(&cpu.serial_number)
    ))?;
    writer.write_fmt(format_args!("\tAsset Tag: {}\n", text(&cpu.asset_tag)))?;
    writer.write_fmt(format_args!(
        "\tPart Number: {}\n",
        text(&cpu.part_number)
    ))?;
    writer.write_fmt(format_args!("\tCore Count: {}\n", cpu.core_count_mixed()))?;
    writer.write_fmt(format_args!(
        "\tCore Enabled: {}\n",
        cpu.core_enabled_mixed()
    ))?;
    writer.write_fmt(format_args!(
        "\tThread Count: {}\n",
        cpu.thread_count_mixed()
    ))?;
    dump_list("Characteristics", &cpu.characteristics, writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bios_structure() -> RawStructure {
        let mut f = vec![0u8; 20];
        f[0] = 1;
        f[1] = 2;
        f[3] = 0xE8;
        f[5] = 0x0F;
        f[14] = 0x80;
        f[15] = 0x08;
        f[16] = 1;
        f[17] = 4;
        f[18] = 0xFF;
        f[19] = 0xFF;
        RawStructure::new(
            0,
            0x0000,
            f,
            vec!["Acme Corp ".to_string(), "F.10".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn test_dump_bios() {
        let raw = bios_structure();
        let bios = BiosRecord::from_raw_structure(&raw).unwrap();

        let mut out: Vec<u8> = vec![];
        dump_bios(&raw, &bios, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Handle 0x0000, DMI type 0, 24 bytes\n\
             BIOS Information\n\
             \tVendor: Acme Corp\n\
             \tVersion: F.10\n\
             \tRelease Date: Not Specified\n\
             \tAddress: 0xE800\n\
             \tROM Size: 1024 kB\n\
             \tCharacteristics:\n\
             \t\tPCI\n\
             \t\tUpgradeable (Flash)\n\
             \t\tSmart Battery\n\
             \t\tUEFI Specification\n\
             \tBIOS Revision: 1.4\n"
        );
    }

    #[test]
    fn test_malformed_record_skipped() {
        let raw = bios_structure();
        assert!(record(BiosRecord::from_raw_structure(&raw)).is_some());

        let truncated = RawStructure::new(0, 0x0001, raw.formatted.slice(..10), vec![]).unwrap();
        assert!(record(BiosRecord::from_raw_structure(&truncated)).is_none());
        assert!(record(ProcessorRecord::from_raw_structure(&raw)).is_none());
    }

    #[test]
    fn test_dump_list_empty() {
        let mut out: Vec<u8> = vec![];
        dump_list("Flags", &[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\tFlags: None\n");
    }

    #[test]
    fn test_args() {
        let args = Args::try_parse_from(["smbios-ls", "--dump", "dmi.bin", "processor"]).unwrap();
        assert!(args.kind == Kind::Processor);
        assert_eq!(args.dump, Some(PathBuf::from("dmi.bin")));

        let args = Args::try_parse_from(["smbios-ls"]).unwrap();
        assert!(args.kind == Kind::All);
    }
}
