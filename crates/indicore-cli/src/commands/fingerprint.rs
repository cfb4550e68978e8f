//! Fingerprint command implementation.

use indicore_canonical::fingerprint;

pub fn run(text: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", fingerprint(text));
    Ok(())
}
