//! Describe command implementation.

use indicore_taxonomy::Taxonomy;

use crate::output;

pub fn run(name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let def = Taxonomy::builtin()
        .lookup(name)
        .map_err(|e| e.to_string())?;
    println!("{}", output::format_json(def));
    Ok(())
}
