/// Returns the label of every table entry whose bit is set in `value`.
///
/// `table` is a list of `(bit position, label)` pairs sorted by ascending bit
/// position, and the labels come back in that order.
pub fn decode_flags(value: u64, table: &[(u8, &'static str)]) -> Vec<String> {
    debug_assert!(table.windows(2).all(|w| w[0].0 < w[1].0));

    table
        .iter()
        .filter(|(bit, _)| *bit < 64 && (value >> bit) & 1 == 1)
        .map(|(_, name)| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SPARSE: [(u8, &str); 4] = [(0, "a"), (3, "b"), (8, "c"), (31, "d")];

    #[test]
    fn test_decode_zero() {
        assert!(decode_flags(0, &SPARSE).is_empty());
    }

    #[test]
    fn test_decode_is_a_bit_position_test() {
        // bit 3 is value 0x08, not value 3
        assert_eq!(decode_flags(0x03, &SPARSE), vec!["a"]);
        assert_eq!(decode_flags(0x08, &SPARSE), vec!["b"]);
        assert_eq!(decode_flags(0x100, &SPARSE), vec!["c"]);
    }

    #[test]
    fn test_decode_ascending_order() {
        assert_eq!(
            decode_flags(0x8000_0109, &SPARSE),
            vec!["a", "b", "c", "d"]
        );
        assert_eq!(decode_flags(u64::MAX, &SPARSE), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_decode_deterministic() {
        let first = decode_flags(0xDEAD_BEEF, &SPARSE);
        for _ in 0..16 {
            assert_eq!(decode_flags(0xDEAD_BEEF, &SPARSE), first);
        }
    }

    #[test]
    fn test_bits_outside_table_ignored() {
        assert_eq!(decode_flags(0xF0F0_0000, &SPARSE), vec!["d"]);
    }
}
