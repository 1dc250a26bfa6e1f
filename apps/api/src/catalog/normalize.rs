/// Splits a multi-line dataset cell into its entries.
///
/// Each line is trimmed and blank lines are dropped; order is preserved.
/// An absent cell yields an empty list. Never fails.
pub fn normalize(cell: Option<&str>) -> Vec<String> {
    match cell {
        Some(text) => text
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect(),
        None => Vec::new(),
    }
}
