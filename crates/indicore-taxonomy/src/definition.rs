//! Type definition nodes.

use indicore_canonical::{DataType, RawValue, Validated, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One node of the taxonomy graph: a named indicator type, its validation
/// family, and its structural relationships.
///
/// Attributes and associations nest other definitions by value: each parent
/// owns independent copies, mirroring the catalogue's pass-by-value
/// composition. Serialized field names match the external catalogue format;
/// empty collections are omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDefinition {
    /// Unique kebab-case name of the indicator type.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Human description; may be empty.
    pub description: String,
    /// Validation family values of this type normalize through.
    #[serde(rename = "dataType")]
    pub data_type: DataType,
    /// Optional example value for documentation export.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub example: Option<Value>,
    /// Sub-field types an object of this type may carry.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub attributes: Vec<TypeDefinition>,
    /// Types this one is commonly linked to without being sub-fields.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub associations: Vec<TypeDefinition>,
    /// Free-form category labels.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
    /// Names of types whose matching fingerprints evidence the same entity.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub correlate: Vec<String>,
}

impl TypeDefinition {
    /// Creates a definition with no relationships.
    pub fn new(
        type_name: impl Into<String>,
        description: impl Into<String>,
        data_type: DataType,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            description: description.into(),
            data_type,
            example: None,
            attributes: Vec::new(),
            associations: Vec::new(),
            tags: Vec::new(),
            correlate: Vec::new(),
        }
    }

    /// Sets the documentation example value.
    pub fn with_example(mut self, example: Value) -> Self {
        self.example = Some(example);
        self
    }

    /// Sets the nested attribute types.
    pub fn with_attributes(mut self, attributes: Vec<TypeDefinition>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Sets the associated types.
    pub fn with_associations(mut self, associations: Vec<TypeDefinition>) -> Self {
        self.associations = associations;
        self
    }

    /// Sets the category labels.
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Sets the correlation type names.
    pub fn with_correlate(mut self, correlate: &[&str]) -> Self {
        self.correlate = correlate.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Validates a raw value against this type's declared data type.
    pub fn validate_value(&self, value: &RawValue) -> Result<Validated, ValidationError> {
        self.data_type.validate(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_relationships_are_omitted_from_serialized_form() {
        let def = TypeDefinition::new("md5", "Hash MD5", DataType::Md5);
        let json = serde_json::to_value(&def).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "md5",
                "description": "Hash MD5",
                "dataType": "MD5"
            })
        );
    }

    #[test]
    fn relationships_serialize_under_catalogue_field_names() {
        let def = TypeDefinition::new("file", "A file", DataType::Object)
            .with_attributes(vec![TypeDefinition::new("md5", "Hash MD5", DataType::Md5)])
            .with_tags(&["malware"])
            .with_correlate(&["md5"]);
        let json = serde_json::to_value(&def).unwrap();
        assert_eq!(json["dataType"], "UUID|MD5|SHA3-256");
        assert_eq!(json["attributes"][0]["type"], "md5");
        assert_eq!(json["tags"][0], "malware");
        assert_eq!(json["correlate"][0], "md5");
        assert!(json.get("associations").is_none());
        assert!(json.get("example").is_none());
    }

    #[test]
    fn example_serializes_when_set_and_is_omitted_otherwise() {
        let bare = TypeDefinition::new("asn", "ASN", DataType::Integer);
        assert!(serde_json::to_value(&bare).unwrap().get("example").is_none());

        let with_example = bare.with_example(serde_json::json!(64496));
        let json = serde_json::to_value(&with_example).unwrap();
        assert_eq!(json["example"], serde_json::json!(64496));
    }

    #[test]
    fn validate_value_dispatches_on_the_declared_data_type() {
        let def = TypeDefinition::new("md5", "Hash MD5", DataType::Md5);
        let outcome = def
            .validate_value(&"D41D8CD98F00B204E9800998ECF8427E".into())
            .unwrap();
        assert_eq!(
            outcome.value.canonical_text(),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
    }
}
