//! DMTF code and bit-flag tables for BIOS and Processor Information.
//!
//! Code tables are ordered maps keyed by the raw field value. Bit-flag tables
//! are `(bit position, label)` pairs sorted by bit position.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// BIOS Characteristics, one entry per bit.
pub const BIOS_CHARACTERISTICS: [(u8, &str); 32] = [
    (0, "Reserved"),
    (1, "Reserved"),
    (2, "Unknown"),
    (3, "Not Supported"),
    (4, "ISA"),
    (5, "MCA"),
    (6, "EISA"),
    (7, "PCI"),
    (8, "PCMCIA"),
    (9, "PnP"),
    (10, "APM"),
    (11, "Upgradeable (Flash)"),
    (12, "Shadowing"),
    (13, "VL-VESA"),
    (14, "ESCD"),
    (15, "CD Boot"),
    (16, "Selectable Boot"),
    (17, "BIOS ROM Socketed"),
    (18, "PCMCIA Boot"),
    (19, "EDD"),
    (20, "NEC Floppy"),
    (21, "Toshiba Floppy"),
    (22, "5.25in/360KB Floppy"),
    (23, "5.25in/1.2MB Floppy"),
    (24, "3.5in/720KB Floppy"),
    (25, "3.5in/2.88MB Floppy"),
    (26, "PrintScreen Service"),
    (27, "8042 Keyboard"),
    (28, "Serial Services"),
    (29, "Printer Services"),
    (30, "CGA/Mono Video Services"),
    (31, "NEC PC-98"),
];

/// BIOS Characteristics Extension Byte 1.
pub const BIOS_CHARACTERISTICS_EX1: [(u8, &str); 8] = [
    (0, "ACPI"),
    (1, "USB Legacy"),
    (2, "AGP"),
    (3, "I2O Boot"),
    (4, "LS-120 SuperDisk Boot"),
    (5, "ATAPI ZIP Drive Boot"),
    (6, "1394 Boot"),
    (7, "Smart Battery"),
];

/// BIOS Characteristics Extension Byte 2.
pub const BIOS_CHARACTERISTICS_EX2: [(u8, &str); 7] = [
    (0, "BIOS Boot Specification"),
    (1, "Fn Key Network Boot"),
    (2, "Targetted Content Distribution"),
    (3, "UEFI Specification"),
    (4, "IsVirtual"),
    (5, "Manufacturing Mode Supported"),
    (6, "Manufacturing Mode Enabled"),
];

/// Processor Characteristics. Bits 8-15 are reserved.
pub const PROCESSOR_CHARACTERISTICS: [(u8, &str); 8] = [
    (0, "Reserved"),
    (1, "Unknown"),
    (2, "64-bit Capable"),
    (3, "Multi-Core"),
    (4, "Hardware Thread"),
    (5, "Execute Protection"),
    (6, "Enhanced Virtualization"),
    (7, "Power/Performance Control"),
];

/// Legacy feature flags, CPUID leaf 1 EDX.
pub const PROCESSOR_FEATURE_FLAGS: [(u8, &str); 32] = [
    (0, "fpu"),
    (1, "vme"),
    (2, "de"),
    (3, "pse"),
    (4, "tsc"),
    (5, "msr"),
    (6, "pae"),
    (7, "mce"),
    (8, "cx8"),
    (9, "apic"),
    (10, "Reserved"),
    (11, "sep"),
    (12, "mtrr"),
    (13, "pge"),
    (14, "mca"),
    (15, "cmov"),
    (16, "pat"),
    (17, "pse-36"),
    (18, "psn"),
    (19, "clfsh"),
    (20, "Reserved"),
    (21, "ds"),
    (22, "acpi"),
    (23, "mmx"),
    (24, "fxsr"),
    (25, "sse"),
    (26, "sse2"),
    (27, "ss"),
    (28, "htt"),
    (29, "tm"),
    (30, "ia64"),
    (31, "pbe"),
];

pub static PROCESSOR_TYPES: Lazy<BTreeMap<u16, &'static str>> = Lazy::new(|| {
    let mut names = BTreeMap::new();
    names.insert(0x01, "Other");
    names.insert(0x02, "Unknown");
    names.insert(0x03, "Central Processor");
    names.insert(0x04, "Math Processor");
    names.insert(0x05, "DSP Processor");
    names.insert(0x06, "Video Processor");
    names
});

/// CPU Status, bits 2:0 of the Status field.
pub static CPU_STATUS: Lazy<BTreeMap<u16, &'static str>> = Lazy::new(|| {
    let mut names = BTreeMap::new();
    names.insert(0x00, "Unknown");
    names.insert(0x01, "CPU Enabled");
    names.insert(0x02, "CPU Disabled by User through BIOS Setup");
    names.insert(0x03, "CPU Disabled by BIOS (POST Error)");
    names.insert(0x04, "CPU is idle, waiting to be enabled");
    names.insert(0x07, "Other");
    names
});

/// Processor Family and Processor Family 2 (codes 0x100 and above).
pub static PROCESSOR_FAMILIES: Lazy<BTreeMap<u16, &'static str>> = Lazy::new(|| {
    let mut names = BTreeMap::new();
    names.insert(0x01, "Other");
    names.insert(0x02, "Unknown");
    names.insert(0x03, "8086");
    names.insert(0x04, "80286");
    names.insert(0x05, "Intel386™ processor");
    names.insert(0x06, "Intel486™ processor");
    names.insert(0x07, "8087");
    names.insert(0x08, "80287");
    names.insert(0x09, "80387");
    names.insert(0x0A, "80487");
    names.insert(0x0B, "Intel® Pentium® processor");
    names.insert(0x0C, "Pentium® Pro processor");
    names.insert(0x0D, "Pentium® II processor");
    names.insert(0x0E, "Pentium® processor with MMX™ technology");
    names.insert(0x0F, "Intel Celeron processor");
    names.insert(0x10, "Pentium II Xeon processor");
    names.insert(0x11, "Pentium III processor");
    names.insert(0x12, "M1 Family");
    names.insert(0x13, "M2 Family");
    names.insert(0x14, "Intel Celeron M processor");
    names.insert(0x15, "Intel Pentium 4 HT processor");
    names.insert(0x18, "AMD Duron Processor Family");
    names.insert(0x19, "K5 Family");
    names.insert(0x1A, "K6 Family");
    names.insert(0x1B, "K6-2");
    names.insert(0x1C, "K6-3");
    names.insert(0x1D, "AMD Athlon™ Processor Family [1]");
    names.insert(0x1E, "AMD29000 Family");
    names.insert(0x1F, "K6-2+");
    names.insert(0x20, "Power PC Family");
    names.insert(0x21, "Power PC 601");
    names.insert(0x22, "Power PC 603");
    names.insert(0x23, "Power PC 603+");
    names.insert(0x24, "Power PC 604");
    names.insert(0x25, "Power PC 620");
    names.insert(0x26, "Power PC x704");
    names.insert(0x27, "Power PC 750");
    names.insert(0x28, "Intel® Core™ Duo processor");
    names.insert(0x29, "Intel® Core™ Duo mobile processor");
    names.insert(0x2A, "Intel® Core™ Solo mobile processor");
    names.insert(0x2B, "Intel® Atom™ processor");
    names.insert(0x2C, "Intel® Core™ M processor");
    names.insert(0x2D, "Intel(R) Core(TM) m3 processor");
    names.insert(0x2E, "Intel(R) Core(TM) m5 processor");
    names.insert(0x2F, "Intel(R) Core(TM) m7 processor");
    names.insert(0x30, "Alpha Family [2]");
    names.insert(0x31, "Alpha 21064");
    names.insert(0x32, "Alpha 21066");
    names.insert(0x33, "Alpha 21164");
    names.insert(0x34, "Alpha 21164PC");
    names.insert(0x35, "Alpha 21164a");
    names.insert(0x36, "Alpha 21264");
    names.insert(0x37, "Alpha 21364");
    names.insert(0x38, "AMD Turion™ II Ultra Dual-Core Mobile M Processor Family");
    names.insert(0x39, "AMD Turion™ II Dual-Core Mobile M Processor Family");
    names.insert(0x3A, "AMD Athlon™ II Dual-Core M Processor Family");
    names.insert(0x3B, "AMD Opteron™ 6100 Series Processor");
    names.insert(0x3C, "AMD Opteron™ 4100 Series Processor");
    names.insert(0x3D, "AMD Opteron™ 6200 Series Processor");
    names.insert(0x3E, "AMD Opteron™ 4200 Series Processor");
    names.insert(0x3F, "AMD FX™ Series Processor");
    names.insert(0x40, "MIPS Family");
    names.insert(0x41, "MIPS R4000");
    names.insert(0x42, "MIPS R4200");
    names.insert(0x43, "MIPS R4400");
    names.insert(0x44, "MIPS R4600");
    names.insert(0x45, "MIPS R10000");
    names.insert(0x46, "AMD C-Series Processor");
    names.insert(0x47, "AMD E-Series Processor");
    names.insert(0x48, "AMD A-Series Processor");
    names.insert(0x49, "AMD G-Series Processor");
    names.insert(0x4A, "AMD Z-Series Processor");
    names.insert(0x4B, "AMD R-Series Processor");
    names.insert(0x4C, "AMD Opteron™ 4300 Series Processor");
    names.insert(0x4D, "AMD Opteron™ 6300 Series Processor");
    names.insert(0x4E, "AMD Opteron™ 3300 Series Processor");
    names.insert(0x4F, "AMD FirePro™ Series Processor");
    names.insert(0x50, "SPARC Family");
    names.insert(0x51, "SuperSPARC");
    names.insert(0x52, "microSPARC II");
    names.insert(0x53, "microSPARC IIep");
    names.insert(0x54, "UltraSPARC");
    names.insert(0x55, "UltraSPARC II");
    names.insert(0x56, "UltraSPARC Iii");
    names.insert(0x57, "UltraSPARC III");
    names.insert(0x58, "UltraSPARC IIIi");
    names.insert(0x60, "68040 Family");
    names.insert(0x61, "68xxx");
    names.insert(0x62, "68000");
    names.insert(0x63, "68010");
    names.insert(0x64, "68020");
    names.insert(0x65, "68030");
    names.insert(0x66, "AMD Athlon(TM) X4 Quad-Core Processor Family");
    names.insert(0x67, "AMD Opteron(TM) X1000 Series Processor");
    names.insert(0x68, "AMD Opteron(TM) X2000 Series APU");
    names.insert(0x69, "AMD Opteron(TM) A-Series Processor");
    names.insert(0x6A, "AMD Opteron(TM) X3000 Series APU");
    names.insert(0x6B, "AMD Zen Processor Family");
    names.insert(0x70, "Hobbit Family");
    names.insert(0x78, "Crusoe™ TM5000 Family");
    names.insert(0x79, "Crusoe™ TM3000 Family");
    names.insert(0x7A, "Efficeon™ TM8000 Family");
    names.insert(0x80, "Weitek");
    names.insert(0x82, "Itanium™ processor");
    names.insert(0x83, "AMD Athlon™ 64 Processor Family");
    names.insert(0x84, "AMD Opteron™ Processor Family");
    names.insert(0x85, "AMD Sempron™ Processor Family");
    names.insert(0x86, "AMD Turion™ 64 Mobile Technology");
    names.insert(0x87, "Dual-Core AMD Opteron™ Processor Family");
    names.insert(0x88, "AMD Athlon™ 64 X2 Dual-Core Processor Family");
    names.insert(0x89, "AMD Turion™ 64 X2 Mobile Technology");
    names.insert(0x8A, "Quad-Core AMD Opteron™ Processor Family");
    names.insert(0x8B, "Third-Generation AMD Opteron™ Processor Family");
    names.insert(0x8C, "AMD Phenom™ FX Quad-Core Processor Family");
    names.insert(0x8D, "AMD Phenom™ X4 Quad-Core Processor Family");
    names.insert(0x8E, "AMD Phenom™ X2 Dual-Core Processor Family");
    names.insert(0x8F, "AMD Athlon™ X2 Dual-Core Processor Family");
    names.insert(0x90, "PA-RISC Family");
    names.insert(0x91, "PA-RISC 8500");
    names.insert(0x92, "PA-RISC 8000");
    names.insert(0x93, "PA-RISC 7300LC");
    names.insert(0x94, "PA-RISC 7200");
    names.insert(0x95, "PA-RISC 7100LC");
    names.insert(0x96, "PA-RISC 7100");
    names.insert(0xA0, "V30 Family");
    names.insert(0xA1, "Quad-Core Intel® Xeon® processor 3200 Series");
    names.insert(0xA2, "Dual-Core Intel® Xeon® processor 3000 Series");
    names.insert(0xA3, "Quad-Core Intel® Xeon® processor 5300 Series");
    names.insert(0xA4, "Dual-Core Intel® Xeon® processor 5100 Series");
    names.insert(0xA5, "Dual-Core Intel® Xeon® processor 5000 Series");
    names.insert(0xA6, "Dual-Core Intel® Xeon® processor LV");
    names.insert(0xA7, "Dual-Core Intel® Xeon® processor ULV");
    names.insert(0xA8, "Dual-Core Intel® Xeon® processor 7100 Series");
    names.insert(0xA9, "Quad-Core Intel® Xeon® processor 5400 Series");
    names.insert(0xAA, "Quad-Core Intel® Xeon® processor");
    names.insert(0xAB, "Dual-Core Intel® Xeon® processor 5200 Series");
    names.insert(0xAC, "Dual-Core Intel® Xeon® processor 7200 Series");
    names.insert(0xAD, "Quad-Core Intel® Xeon® processor 7300 Series");
    names.insert(0xAE, "Quad-Core Intel® Xeon® processor 7400 Series");
    names.insert(0xAF, "Multi-Core Intel Xeon processor 7400 Series");
    names.insert(0xB0, "Pentium III Xeon processor");
    names.insert(0xB1, "Pentium® III Processor with Intel® SpeedStep™ Technology");
    names.insert(0xB2, "Pentium® 4 Processor");
    names.insert(0xB3, "Intel® Xeon® processor");
    names.insert(0xB4, "AS400 Family");
    names.insert(0xB5, "Intel® Xeon™ processor MP");
    names.insert(0xB6, "AMD Athlon™ XP Processor Family");
    names.insert(0xB7, "AMD Athlon™ MP Processor Family");
    names.insert(0xB8, "Intel® Itanium® 2 processor");
    names.insert(0xB9, "Intel® Pentium® M processor");
    names.insert(0xBA, "Intel® Celeron® D processor");
    names.insert(0xBB, "Intel® Pentium® D processor");
    names.insert(0xBC, "Intel® Pentium® Processor Extreme Edition");
    names.insert(0xBD, "Intel® Core™ Solo Processor");
    names.insert(0xBF, "Intel® Core™ 2 Duo Processor");
    names.insert(0xC0, "Intel® Core™ 2 Solo processor");
    names.insert(0xC1, "Intel® Core™ 2 Extreme processor");
    names.insert(0xC2, "Intel® Core™ 2 Quad processor");
    names.insert(0xC3, "Intel® Core™ 2 Extreme mobile processor");
    names.insert(0xC4, "Intel® Core™ 2 Duo mobile processor");
    names.insert(0xC5, "Intel® Core™ 2 Solo mobile processor");
    names.insert(0xC6, "Intel® Core™ i7 processor");
    names.insert(0xC7, "Dual-Core Intel® Celeron® processor");
    names.insert(0xC8, "IBM390 Family");
    names.insert(0xC9, "G4");
    names.insert(0xCA, "G5");
    names.insert(0xCB, "ESA/390 G6");
    names.insert(0xCC, "z/Architecture base");
    names.insert(0xCD, "Intel® Core™ i5 processor");
    names.insert(0xCE, "Intel® Core™ i3 processor");
    names.insert(0xCF, "Intel Core i9 processor");
    names.insert(0xD2, "VIA C7™-M Processor Family");
    names.insert(0xD3, "VIA C7™-D Processor Family");
    names.insert(0xD4, "VIA C7™ Processor Family");
    names.insert(0xD5, "VIA Eden™ Processor Family");
    names.insert(0xD6, "Multi-Core Intel® Xeon® processor");
    names.insert(0xD7, "Dual-Core Intel® Xeon® processor 3xxx Series");
    names.insert(0xD8, "Quad-Core Intel® Xeon® processor 3xxx Series");
    names.insert(0xD9, "VIA Nano™ Processor Family");
    names.insert(0xDA, "Dual-Core Intel® Xeon® processor 5xxx Series");
    names.insert(0xDB, "Quad-Core Intel® Xeon® processor 5xxx Series");
    names.insert(0xDD, "Dual-Core Intel® Xeon® processor 7xxx Series");
    names.insert(0xDE, "Quad-Core Intel® Xeon® processor 7xxx Series");
    names.insert(0xDF, "Multi-Core Intel® Xeon® processor 7xxx Series");
    names.insert(0xE0, "Multi-Core Intel® Xeon® processor 3400 Series");
    names.insert(0xE4, "AMD Opteron™ 3000 Series Processor");
    names.insert(0xE5, "AMD Sempron™ II Processor");
    names.insert(0xE6, "Embedded AMD Opteron™ Quad-Core Processor Family");
    names.insert(0xE7, "AMD Phenom™ Triple-Core Processor Family");
    names.insert(0xE8, "AMD Turion™ Ultra Dual-Core Mobile Processor Family");
    names.insert(0xE9, "AMD Turion™ Dual-Core Mobile Processor Family");
    names.insert(0xEA, "AMD Athlon™ Dual-Core Processor Family");
    names.insert(0xEB, "AMD Sempron™ SI Processor Family");
    names.insert(0xEC, "AMD Phenom™ II Processor Family");
    names.insert(0xED, "AMD Athlon™ II Processor Family");
    names.insert(0xEE, "Six-Core AMD Opteron™ Processor Family");
    names.insert(0xEF, "AMD Sempron™ M Processor Family");
    names.insert(0xFA, "i860");
    names.insert(0xFB, "i960");
    names.insert(0xFE, "See Processor Family 2");
    names.insert(0x0100, "ARMv7");
    names.insert(0x0101, "ARMv8");
    names.insert(0x0102, "ARMv9");
    names.insert(0x0104, "SH-3");
    names.insert(0x0105, "SH-4");
    names.insert(0x0118, "ARM");
    names.insert(0x0119, "StrongARM");
    names.insert(0x012C, "6x86");
    names.insert(0x012D, "MediaGX");
    names.insert(0x012E, "MII");
    names.insert(0x0140, "WinChip");
    names.insert(0x015E, "DSP");
    names.insert(0x01F4, "Video Processor");
    names.insert(0x0200, "RISC-V RV32");
    names.insert(0x0201, "RISC-V RV64");
    names.insert(0x0202, "RISC-V RV128");
    names.insert(0x0258, "LoongArch");
    names.insert(0x0259, "Loongson 1 Processor Family");
    names.insert(0x025A, "Loongson 2 Processor Family");
    names.insert(0x025B, "Loongson 3 Processor Family");
    names.insert(0x025C, "Loongson 2K Processor Family");
    names.insert(0x025D, "Loongson 3A Processor Family");
    names.insert(0x025E, "Loongson 3B Processor Family");
    names.insert(0x025F, "Loongson 3C Processor Family");
    names.insert(0x0260, "Loongson 3D Processor Family");
    names.insert(0x0261, "Loongson 3E Processor Family");
    names.insert(0x0262, "Dual-Core Loongson 2K Processor 2xxx Series");
    names.insert(0x026C, "Quad-Core Loongson 3A Processor 5xxx Series");
    names.insert(0x026D, "Multi-Core Loongson 3A Processor 5xxx Series");
    names.insert(0x026E, "Quad-Core Loongson 3B Processor 5xxx Series");
    names.insert(0x026F, "Multi-Core Loongson 3B Processor 5xxx Series");
    names.insert(0x0270, "Multi-Core Loongson 3C Processor 5xxx Series");
    names.insert(0x0271, "Multi-Core Loongson 3D Processor 5xxx Series");
    names
});

/// Processor Upgrade, i.e. the socket type.
pub static PROCESSOR_UPGRADES: Lazy<BTreeMap<u16, &'static str>> = Lazy::new(|| {
    let mut names = BTreeMap::new();
    names.insert(0x01, "Other");
    names.insert(0x02, "Unknown");
    names.insert(0x03, "Daughter Board");
    names.insert(0x04, "ZIF Socket");
    names.insert(0x05, "Replaceable Piggy Back");
    names.insert(0x06, "None");
    names.insert(0x07, "LIF Socket");
    names.insert(0x08, "Slot 1");
    names.insert(0x09, "Slot 2");
    names.insert(0x0A, "370-pin socket");
    names.insert(0x0B, "Slot A");
    names.insert(0x0C, "Slot M");
    names.insert(0x0D, "Socket 423");
    names.insert(0x0E, "Socket A (Socket 462)");
    names.insert(0x0F, "Socket 478");
    names.insert(0x10, "Socket 754");
    names.insert(0x11, "Socket 940");
    names.insert(0x12, "Socket 939");
    names.insert(0x13, "Socket mPGA604");
    names.insert(0x14, "Socket LGA771");
    names.insert(0x15, "Socket LGA775");
    names.insert(0x16, "Socket S1");
    names.insert(0x17, "Socket AM2");
    names.insert(0x18, "Socket F (1207)");
    names.insert(0x19, "Socket LGA1366");
    names.insert(0x1A, "Socket G34");
    names.insert(0x1B, "Socket AM3");
    names.insert(0x1C, "Socket C32");
    names.insert(0x1D, "Socket LGA1156");
    names.insert(0x1E, "Socket LGA1567");
    names.insert(0x1F, "Socket PGA988A");
    names.insert(0x20, "Socket BGA1288");
    names.insert(0x21, "Socket rPGA988B");
    names.insert(0x22, "Socket BGA1023");
    names.insert(0x23, "Socket BGA1224");
    names.insert(0x24, "Socket LGA1155");
    names.insert(0x25, "Socket LGA1356");
    names.insert(0x26, "Socket LGA2011");
    names.insert(0x27, "Socket FS1");
    names.insert(0x28, "Socket FS2");
    names.insert(0x29, "Socket FM1");
    names.insert(0x2A, "Socket FM2");
    names.insert(0x2B, "Socket LGA2011-3");
    names.insert(0x2C, "Socket LGA1356-3");
    names.insert(0x2D, "Socket LGA1150");
    names.insert(0x2E, "Socket BGA1168");
    names.insert(0x2F, "Socket BGA1234");
    names.insert(0x30, "Socket BGA1364");
    names.insert(0x31, "Socket AM4");
    names.insert(0x32, "Socket LGA1151");
    names.insert(0x33, "Socket BGA1356");
    names.insert(0x34, "Socket BGA1440");
    names.insert(0x35, "Socket BGA1515");
    names.insert(0x36, "Socket LGA3647-1");
    names.insert(0x37, "Socket SP3");
    names.insert(0x38, "Socket SP3r2");
    names.insert(0x39, "Socket LGA2066");
    names.insert(0x3A, "Socket BGA1392");
    names.insert(0x3B, "Socket BGA1510");
    names.insert(0x3C, "Socket BGA1528");
    names.insert(0x3D, "Socket LGA4189");
    names.insert(0x3E, "Socket LGA1200");
    names.insert(0x3F, "Socket LGA4677");
    names.insert(0x40, "Socket LGA1700");
    names.insert(0x41, "Socket BGA1744");
    names.insert(0x42, "Socket BGA1781");
    names.insert(0x43, "Socket BGA1211");
    names.insert(0x44, "Socket BGA2422");
    names.insert(0x45, "Socket LGA1211");
    names.insert(0x46, "Socket LGA2422");
    names.insert(0x47, "Socket LGA5773");
    names.insert(0x48, "Socket BGA5773");
    names
});
