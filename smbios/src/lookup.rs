use std::collections::BTreeMap;

/// Maps `code` to its label, or to `"Unknown/Reserved (<code>)"`.
pub fn lookup_code(table: &BTreeMap<u16, &'static str>, code: u16) -> String {
    match table.get(&code) {
        Some(name) => name.to_string(),
        None => format!("Unknown/Reserved ({})", code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lookup_hit_and_miss() {
        let table: BTreeMap<u16, &'static str> = [(1, "Other"), (2, "Unknown")].into();

        assert_eq!(lookup_code(&table, 1), "Other");
        assert_eq!(lookup_code(&table, 0), "Unknown/Reserved (0)");
        assert_eq!(lookup_code(&table, 0x1FF), "Unknown/Reserved (511)");
    }
}
