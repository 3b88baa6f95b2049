use std::collections::BTreeSet;

/// Token an empty spreadsheet cell turns into once stringified.
pub const MISSING_VALUE_TOKEN: &str = "nan";

/// Splits a comma-separated cell into a set of trimmed entries.
///
/// An empty cell yields `{"nan"}` rather than an empty set. Empty entries
/// between commas are kept as `""`.
pub(crate) fn split_field(raw: Option<&str>) -> BTreeSet<String> {
    let raw = match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => MISSING_VALUE_TOKEN,
    };

    raw.split(',')
        .map(|entry| entry.trim().to_string())
        .collect()
}
