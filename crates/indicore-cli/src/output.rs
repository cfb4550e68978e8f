//! Output formatting utilities.

use indicore_taxonomy::TypeDefinition;

/// Formats a serializable value as pretty JSON.
pub fn format_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Formats a type definition as a catalogue table row.
pub fn format_table_row(def: &TypeDefinition) -> String {
    format!(
        "{:<28} {:<22} {}",
        truncate(&def.type_name, 28),
        def.data_type.as_str(),
        truncate(&def.description, 60)
    )
}

/// Prints the catalogue table header.
pub fn print_table_header() {
    println!("{:<28} {:<22} {}", "TYPE", "DATA_TYPE", "DESCRIPTION");
    println!("{}", "-".repeat(100));
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
