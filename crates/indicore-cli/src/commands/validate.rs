//! Validate command implementation.

use indicore_canonical::RawValue;
use indicore_taxonomy::Taxonomy;
use serde_json::json;

use crate::output;

pub fn run(type_name: &str, raw: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // A bare word like "example.com" is not valid JSON; treat it as text.
    let value: RawValue = serde_json::from_str(raw).unwrap_or_else(|_| RawValue::from(raw));

    match Taxonomy::builtin().validate_value(type_name, &value) {
        Ok(outcome) => {
            if json {
                let rendered = json!({
                    "type": type_name,
                    "value": &outcome.value,
                    "canonical": outcome.value.canonical_text(),
                    "fingerprint": &outcome.fingerprint,
                });
                println!("{}", output::format_json(&rendered));
            } else {
                println!("canonical:   {}", outcome.value.canonical_text());
                println!("fingerprint: {}", outcome.fingerprint);
            }
            Ok(())
        }
        Err(e) => {
            if json {
                let rendered = json!({
                    "error": e.to_string(),
                    "transportStatus": e.transport_status(),
                    "statusCode": e.status_code().as_str(),
                });
                println!("{}", output::format_json(&rendered));
            }
            Err(e.to_string().into())
        }
    }
}
