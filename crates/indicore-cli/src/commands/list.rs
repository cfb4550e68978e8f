//! List command implementation.

use indicore_canonical::DataType;
use indicore_taxonomy::Taxonomy;

use crate::output;

pub fn run(json: bool, data_type: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let filter: Option<DataType> = match data_type {
        Some(id) => Some(id.parse().map_err(|e| format!("{}", e))?),
        None => None,
    };

    let taxonomy = Taxonomy::builtin();
    let selected: Vec<_> = taxonomy
        .iter()
        .filter(|def| filter.map_or(true, |dt| def.data_type == dt))
        .collect();

    if json {
        println!("{}", output::format_json(&selected));
    } else {
        output::print_table_header();
        for def in selected {
            println!("{}", output::format_table_row(def));
        }
    }
    Ok(())
}
