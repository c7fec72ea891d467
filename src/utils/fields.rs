//! Raw observation field cleaning.

/// Collapse a raw GSOD field into its bare value.
///
/// Fields arrive space-padded, sometimes with a flag token ahead of the
/// value; only the token after the last space is kept. An empty field is
/// a missing observation and is recorded as `"0"`.
pub fn clean_field(field: &str) -> String {
    let token = field.rsplit(' ').next().unwrap_or(field);
    if token.is_empty() {
        "0".to_string()
    } else {
        token.to_string()
    }
}
